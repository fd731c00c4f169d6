//! Reason codes shared by the MQTT 5.0 control packets
//!
//! See [specification](https://docs.oasis-open.org/mqtt/mqtt/v5.0/os/mqtt-v5.0-os.html#_Toc3901031).

use std::fmt;

use crate::{Error, PacketType};

pub(crate) const SUCCESS: u8 = 0x00;
pub(crate) const NORMAL_DISCONNECTION: u8 = 0x00;
pub(crate) const GRANTED_QOS_0: u8 = 0x00;
pub(crate) const GRANTED_QOS_1: u8 = 0x01;
pub(crate) const GRANTED_QOS_2: u8 = 0x02;
pub(crate) const DISCONNECT_WITH_WILL_MESSAGE: u8 = 0x04;
pub(crate) const NO_MATCHING_SUBSCRIBERS: u8 = 0x10;
pub(crate) const NO_SUBSCRIPTION_EXISTED: u8 = 0x11;
pub(crate) const CONTINUE_AUTHENTICATION: u8 = 0x18;
pub(crate) const RE_AUTHENTICATE: u8 = 0x19;
pub(crate) const UNSPECIFIED_ERROR: u8 = 0x80;
pub(crate) const MALFORMED_PACKET: u8 = 0x81;
pub(crate) const PROTOCOL_ERROR: u8 = 0x82;
pub(crate) const IMPLEMENTATION_SPECIFIC_ERROR: u8 = 0x83;
pub(crate) const UNSUPPORTED_PROTOCOL_VERSION: u8 = 0x84;
pub(crate) const CLIENT_IDENTIFIER_NOT_VALID: u8 = 0x85;
pub(crate) const BAD_USER_NAME_OR_PASSWORD: u8 = 0x86;
pub(crate) const NOT_AUTHORIZED: u8 = 0x87;
pub(crate) const SERVER_UNAVAILABLE: u8 = 0x88;
pub(crate) const SERVER_BUSY: u8 = 0x89;
pub(crate) const BANNED: u8 = 0x8A;
pub(crate) const SERVER_SHUTTING_DOWN: u8 = 0x8B;
pub(crate) const BAD_AUTHENTICATION_METHOD: u8 = 0x8C;
pub(crate) const KEEP_ALIVE_TIMEOUT: u8 = 0x8D;
pub(crate) const SESSION_TAKEN_OVER: u8 = 0x8E;
pub(crate) const TOPIC_FILTER_INVALID: u8 = 0x8F;
pub(crate) const TOPIC_NAME_INVALID: u8 = 0x90;
pub(crate) const PACKET_IDENTIFIER_IN_USE: u8 = 0x91;
pub(crate) const PACKET_IDENTIFIER_NOT_FOUND: u8 = 0x92;
pub(crate) const RECEIVE_MAXIMUM_EXCEEDED: u8 = 0x93;
pub(crate) const TOPIC_ALIAS_INVALID: u8 = 0x94;
pub(crate) const PACKET_TOO_LARGE: u8 = 0x95;
pub(crate) const MESSAGE_RATE_TOO_HIGH: u8 = 0x96;
pub(crate) const QUOTA_EXCEEDED: u8 = 0x97;
pub(crate) const ADMINISTRATIVE_ACTION: u8 = 0x98;
pub(crate) const PAYLOAD_FORMAT_INVALID: u8 = 0x99;
pub(crate) const RETAIN_NOT_SUPPORTED: u8 = 0x9A;
pub(crate) const QOS_NOT_SUPPORTED: u8 = 0x9B;
pub(crate) const USE_ANOTHER_SERVER: u8 = 0x9C;
pub(crate) const SERVER_MOVED: u8 = 0x9D;
pub(crate) const SHARED_SUBSCRIPTIONS_NOT_SUPPORTED: u8 = 0x9E;
pub(crate) const CONNECTION_RATE_EXCEEDED: u8 = 0x9F;
pub(crate) const MAXIMUM_CONNECT_TIME: u8 = 0xA0;
pub(crate) const SUBSCRIPTION_IDENTIFIERS_NOT_SUPPORTED: u8 = 0xA1;
pub(crate) const WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED: u8 = 0xA2;

/// Reason codes with a value of 0x80 or greater indicate failure
pub(crate) const ERROR_CODE_MIN: u8 = 0x80;

/// The side of a connection that transmits a packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Server,
    Client,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Server => f.write_str("server"),
            Sender::Client => f.write_str("client"),
        }
    }
}

/// Outcomes that more than one packet type can report.
///
/// Registry members describing one of these outcomes use the same wire byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommonReasonCode {
    Success = SUCCESS,
    NoMatchingSubscribers = NO_MATCHING_SUBSCRIBERS,
    UnspecifiedError = UNSPECIFIED_ERROR,
    MalformedPacket = MALFORMED_PACKET,
    ProtocolError = PROTOCOL_ERROR,
    ImplementationSpecificError = IMPLEMENTATION_SPECIFIC_ERROR,
    NotAuthorized = NOT_AUTHORIZED,
    ServerBusy = SERVER_BUSY,
    BadAuthenticationMethod = BAD_AUTHENTICATION_METHOD,
    TopicFilterInvalid = TOPIC_FILTER_INVALID,
    TopicNameInvalid = TOPIC_NAME_INVALID,
    PacketIdentifierInUse = PACKET_IDENTIFIER_IN_USE,
    PacketIdentifierNotFound = PACKET_IDENTIFIER_NOT_FOUND,
    PacketTooLarge = PACKET_TOO_LARGE,
    QuotaExceeded = QUOTA_EXCEEDED,
    PayloadFormatInvalid = PAYLOAD_FORMAT_INVALID,
    RetainNotSupported = RETAIN_NOT_SUPPORTED,
    QoSNotSupported = QOS_NOT_SUPPORTED,
    UseAnotherServer = USE_ANOTHER_SERVER,
    ServerMoved = SERVER_MOVED,
    SharedSubscriptionsNotSupported = SHARED_SUBSCRIPTIONS_NOT_SUPPORTED,
    ConnectionRateExceeded = CONNECTION_RATE_EXCEEDED,
    SubscriptionIdentifiersNotSupported = SUBSCRIPTION_IDENTIFIERS_NOT_SUPPORTED,
    WildcardSubscriptionsNotSupported = WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED,
}

impl CommonReasonCode {
    pub const ALL: &'static [CommonReasonCode] = &[
        Self::Success,
        Self::NoMatchingSubscribers,
        Self::UnspecifiedError,
        Self::MalformedPacket,
        Self::ProtocolError,
        Self::ImplementationSpecificError,
        Self::NotAuthorized,
        Self::ServerBusy,
        Self::BadAuthenticationMethod,
        Self::TopicFilterInvalid,
        Self::TopicNameInvalid,
        Self::PacketIdentifierInUse,
        Self::PacketIdentifierNotFound,
        Self::PacketTooLarge,
        Self::QuotaExceeded,
        Self::PayloadFormatInvalid,
        Self::RetainNotSupported,
        Self::QoSNotSupported,
        Self::UseAnotherServer,
        Self::ServerMoved,
        Self::SharedSubscriptionsNotSupported,
        Self::ConnectionRateExceeded,
        Self::SubscriptionIdentifiersNotSupported,
        Self::WildcardSubscriptionsNotSupported,
    ];

    /// The canonical wire byte of this outcome
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|common| common.code() == code)
    }
}

/// A closed set of reason codes that one packet type may carry.
///
/// Implementors list every member in [`ReasonCode::ALL`]; lookups scan that
/// table, so a byte is only ever accepted by the registry that defines it.
/// Direction rules default to "both sides" and are overridden per registry.
pub trait ReasonCode: Copy + Eq + fmt::Debug + Sized + 'static {
    /// The packet type this registry belongs to
    const PACKET_TYPE: PacketType;

    /// Every member of the registry
    const ALL: &'static [Self];

    /// The byte written on the wire
    fn code(self) -> u8;

    /// Returns the member with the given wire byte, or `None` if the byte
    /// is not part of this registry.
    fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|reason| reason.code() == code)
    }

    /// Whether this reason code reports a failure
    #[inline]
    fn is_error(self) -> bool {
        self.code() >= ERROR_CODE_MIN
    }

    fn can_be_sent_by_server(self) -> bool {
        true
    }

    fn can_be_sent_by_client(self) -> bool {
        true
    }

    fn can_be_sent_by(self, sender: Sender) -> bool {
        match sender {
            Sender::Server => self.can_be_sent_by_server(),
            Sender::Client => self.can_be_sent_by_client(),
        }
    }

    /// The shared outcome this member was assigned from, if any.
    ///
    /// Written out per registry: a byte shared with a common code does not
    /// make a member that outcome (normal disconnection is `0x00` too).
    fn common(self) -> Option<CommonReasonCode>;

    /// Checks that `sender` may put this reason code on the wire.
    fn ensure_sendable(self, sender: Sender) -> Result<Self, Error> {
        if self.can_be_sent_by(sender) {
            return Ok(self);
        }

        log::warn!(
            "{:?} reason code {:?} must not be sent by the {}",
            Self::PACKET_TYPE,
            self,
            sender
        );
        Err(Error::IllegalDirection {
            packet: Self::PACKET_TYPE,
            code: self.code(),
            sender,
        })
    }
}

/// Decodes a wire byte into a member of registry `R`
pub(crate) fn decode<R: ReasonCode>(code: u8) -> Result<R, Error> {
    R::from_code(code).ok_or_else(|| {
        log::debug!("Unknown {:?} reason code = {:#04x}", R::PACKET_TYPE, code);
        Error::InvalidReason {
            packet: R::PACKET_TYPE,
            code,
        }
    })
}

/// Property checks every registry must satisfy
#[cfg(test)]
pub(crate) mod registry_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    pub fn lookup_round_trips<R: ReasonCode>() {
        for &reason in R::ALL {
            assert_eq!(R::from_code(reason.code()), Some(reason));
            assert_eq!(decode::<R>(reason.code()), Ok(reason));
        }
    }

    pub fn codes_are_unique<R: ReasonCode>() {
        for (i, a) in R::ALL.iter().enumerate() {
            for b in &R::ALL[i + 1..] {
                assert_ne!(a.code(), b.code(), "{a:?} and {b:?} share a code");
            }
        }
    }

    pub fn unknown_codes_are_rejected<R: ReasonCode>() {
        for code in 0..=u8::MAX {
            if R::ALL.iter().any(|reason| reason.code() == code) {
                continue;
            }

            assert_eq!(R::from_code(code), None);
            assert_eq!(
                decode::<R>(code),
                Err(Error::InvalidReason {
                    packet: R::PACKET_TYPE,
                    code
                })
            );
        }
    }

    pub fn common_codes_match<R: ReasonCode>() {
        for &reason in R::ALL {
            if let Some(common) = reason.common() {
                assert_eq!(reason.code(), common.code(), "{reason:?}");
            }
        }
    }

    /// Compares every member with the byte the protocol assigns it
    pub fn wire_values<R: ReasonCode>(table: &[(R, u8)]) {
        for &reason in R::ALL {
            let expected = table
                .iter()
                .find(|(member, _)| *member == reason)
                .map(|&(_, code)| code);
            assert_eq!(Some(reason.code()), expected, "{reason:?}");
        }
        assert_eq!(table.len(), R::ALL.len());
    }

    pub fn check_registry<R: ReasonCode>() {
        lookup_round_trips::<R>();
        codes_are_unique::<R>();
        unknown_codes_are_rejected::<R>();
        common_codes_match::<R>();
    }
}
