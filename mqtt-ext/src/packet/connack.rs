use crate::{reason, CommonReasonCode, Error, PacketType, ReasonCode};

/// MQTT 5.0 reason codes in CONNACK
///
/// A subset of these codes are used in MQTT 3.1.1 as well.
/// This means a [ConnectReturnCode] can always be converted to a [ConnectReasonCode],
/// but the conversion in the other direction is fallible.
///
/// CONNACK only travels from the server to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectReasonCode {
    Success = reason::SUCCESS,
    UnspecifiedError = reason::UNSPECIFIED_ERROR,
    MalformedPacket = reason::MALFORMED_PACKET,
    ProtocolError = reason::PROTOCOL_ERROR,
    ImplementationSpecificError = reason::IMPLEMENTATION_SPECIFIC_ERROR,
    UnsupportedProtocolVersion = reason::UNSUPPORTED_PROTOCOL_VERSION,
    ClientIdentifierNotValid = reason::CLIENT_IDENTIFIER_NOT_VALID,
    BadUserNamePassword = reason::BAD_USER_NAME_OR_PASSWORD,
    NotAuthorized = reason::NOT_AUTHORIZED,
    ServerUnavailable = reason::SERVER_UNAVAILABLE,
    ServerBusy = reason::SERVER_BUSY,
    Banned = reason::BANNED,
    BadAuthenticationMethod = reason::BAD_AUTHENTICATION_METHOD,
    TopicNameInvalid = reason::TOPIC_NAME_INVALID,
    PacketTooLarge = reason::PACKET_TOO_LARGE,
    QuotaExceeded = reason::QUOTA_EXCEEDED,
    PayloadFormatInvalid = reason::PAYLOAD_FORMAT_INVALID,
    RetainNotSupported = reason::RETAIN_NOT_SUPPORTED,
    QoSNotSupported = reason::QOS_NOT_SUPPORTED,
    UseAnotherServer = reason::USE_ANOTHER_SERVER,
    ServerMoved = reason::SERVER_MOVED,
    ConnectionRateExceeded = reason::CONNECTION_RATE_EXCEEDED,
}

/// MQTT 3.1.1 return codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectReturnCode {
    Success = 0,
    RefusedProtocolVersion,
    BadClientId,
    ServiceUnavailable,
    BadUserNamePassword,
    NotAuthorized,
}

impl ReasonCode for ConnectReasonCode {
    const PACKET_TYPE: PacketType = PacketType::ConnAck;
    const ALL: &'static [Self] = &[
        Self::Success,
        Self::UnspecifiedError,
        Self::MalformedPacket,
        Self::ProtocolError,
        Self::ImplementationSpecificError,
        Self::UnsupportedProtocolVersion,
        Self::ClientIdentifierNotValid,
        Self::BadUserNamePassword,
        Self::NotAuthorized,
        Self::ServerUnavailable,
        Self::ServerBusy,
        Self::Banned,
        Self::BadAuthenticationMethod,
        Self::TopicNameInvalid,
        Self::PacketTooLarge,
        Self::QuotaExceeded,
        Self::PayloadFormatInvalid,
        Self::RetainNotSupported,
        Self::QoSNotSupported,
        Self::UseAnotherServer,
        Self::ServerMoved,
        Self::ConnectionRateExceeded,
    ];

    #[inline]
    fn code(self) -> u8 {
        self as u8
    }

    fn can_be_sent_by_client(self) -> bool {
        false
    }

    fn common(self) -> Option<CommonReasonCode> {
        let common = match self {
            Self::Success => CommonReasonCode::Success,
            Self::UnspecifiedError => CommonReasonCode::UnspecifiedError,
            Self::MalformedPacket => CommonReasonCode::MalformedPacket,
            Self::ProtocolError => CommonReasonCode::ProtocolError,
            Self::ImplementationSpecificError => CommonReasonCode::ImplementationSpecificError,
            Self::NotAuthorized => CommonReasonCode::NotAuthorized,
            Self::ServerBusy => CommonReasonCode::ServerBusy,
            Self::BadAuthenticationMethod => CommonReasonCode::BadAuthenticationMethod,
            Self::TopicNameInvalid => CommonReasonCode::TopicNameInvalid,
            Self::PacketTooLarge => CommonReasonCode::PacketTooLarge,
            Self::QuotaExceeded => CommonReasonCode::QuotaExceeded,
            Self::PayloadFormatInvalid => CommonReasonCode::PayloadFormatInvalid,
            Self::RetainNotSupported => CommonReasonCode::RetainNotSupported,
            Self::QoSNotSupported => CommonReasonCode::QoSNotSupported,
            Self::UseAnotherServer => CommonReasonCode::UseAnotherServer,
            Self::ServerMoved => CommonReasonCode::ServerMoved,
            Self::ConnectionRateExceeded => CommonReasonCode::ConnectionRateExceeded,
            Self::UnsupportedProtocolVersion
            | Self::ClientIdentifierNotValid
            | Self::BadUserNamePassword
            | Self::ServerUnavailable
            | Self::Banned => return None,
        };
        Some(common)
    }
}

impl TryFrom<u8> for ConnectReasonCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        reason::decode(value)
    }
}

impl TryFrom<u8> for ConnectReturnCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::RefusedProtocolVersion,
            2 => Self::BadClientId,
            3 => Self::ServiceUnavailable,
            4 => Self::BadUserNamePassword,
            5 => Self::NotAuthorized,
            num => {
                return Err(Error::InvalidReason {
                    packet: PacketType::ConnAck,
                    code: num,
                })
            }
        };

        Ok(code)
    }
}

impl From<ConnectReturnCode> for ConnectReasonCode {
    fn from(value: ConnectReturnCode) -> Self {
        match value {
            ConnectReturnCode::Success => Self::Success,
            ConnectReturnCode::RefusedProtocolVersion => Self::UnsupportedProtocolVersion,
            ConnectReturnCode::BadClientId => Self::ClientIdentifierNotValid,
            ConnectReturnCode::ServiceUnavailable => Self::ServerUnavailable,
            ConnectReturnCode::BadUserNamePassword => Self::BadUserNamePassword,
            ConnectReturnCode::NotAuthorized => Self::NotAuthorized,
        }
    }
}

impl TryFrom<ConnectReasonCode> for ConnectReturnCode {
    type Error = Error;

    fn try_from(value: ConnectReasonCode) -> Result<Self, Self::Error> {
        let code = match value {
            ConnectReasonCode::Success => Self::Success,
            ConnectReasonCode::UnsupportedProtocolVersion => Self::RefusedProtocolVersion,
            ConnectReasonCode::ClientIdentifierNotValid => Self::BadClientId,
            ConnectReasonCode::ServerUnavailable => Self::ServiceUnavailable,
            ConnectReasonCode::BadUserNamePassword => Self::BadUserNamePassword,
            ConnectReasonCode::NotAuthorized => Self::NotAuthorized,
            _ => {
                // MQTT 3.1.1 does not support all MQTT 5.0 reason codes
                return Err(Error::InvalidReason {
                    packet: PacketType::ConnAck,
                    code: value.code(),
                });
            }
        };
        Ok(code)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reason::registry_tests::{check_registry, wire_values};

    #[test]
    fn registry_properties() {
        check_registry::<ConnectReasonCode>();
    }

    #[test]
    fn protocol_bytes() {
        wire_values(&[
            (ConnectReasonCode::Success, 0x00),
            (ConnectReasonCode::UnspecifiedError, 0x80),
            (ConnectReasonCode::MalformedPacket, 0x81),
            (ConnectReasonCode::ProtocolError, 0x82),
            (ConnectReasonCode::ImplementationSpecificError, 0x83),
            (ConnectReasonCode::UnsupportedProtocolVersion, 0x84),
            (ConnectReasonCode::ClientIdentifierNotValid, 0x85),
            (ConnectReasonCode::BadUserNamePassword, 0x86),
            (ConnectReasonCode::NotAuthorized, 0x87),
            (ConnectReasonCode::ServerUnavailable, 0x88),
            (ConnectReasonCode::ServerBusy, 0x89),
            (ConnectReasonCode::Banned, 0x8A),
            (ConnectReasonCode::BadAuthenticationMethod, 0x8C),
            (ConnectReasonCode::TopicNameInvalid, 0x90),
            (ConnectReasonCode::PacketTooLarge, 0x95),
            (ConnectReasonCode::QuotaExceeded, 0x97),
            (ConnectReasonCode::PayloadFormatInvalid, 0x99),
            (ConnectReasonCode::RetainNotSupported, 0x9A),
            (ConnectReasonCode::QoSNotSupported, 0x9B),
            (ConnectReasonCode::UseAnotherServer, 0x9C),
            (ConnectReasonCode::ServerMoved, 0x9D),
            (ConnectReasonCode::ConnectionRateExceeded, 0x9F),
        ]);
    }

    #[test]
    fn connect_only_codes_have_no_common_outcome() {
        for reason in [
            ConnectReasonCode::UnsupportedProtocolVersion,
            ConnectReasonCode::ClientIdentifierNotValid,
            ConnectReasonCode::BadUserNamePassword,
            ConnectReasonCode::ServerUnavailable,
            ConnectReasonCode::Banned,
        ] {
            assert_eq!(reason.common(), None, "{reason:?}");
        }
        assert_eq!(
            ConnectReasonCode::ServerBusy.common(),
            Some(CommonReasonCode::ServerBusy)
        );
    }

    #[test]
    fn never_sent_by_client() {
        for &reason in ConnectReasonCode::ALL {
            assert!(reason.can_be_sent_by_server());
            assert!(!reason.can_be_sent_by_client());
        }
    }

    #[test]
    fn return_codes_upgrade_losslessly() {
        for code in 0..=5u8 {
            let v4 = ConnectReturnCode::try_from(code).unwrap();
            let v5 = ConnectReasonCode::from(v4);
            assert_eq!(ConnectReturnCode::try_from(v5).unwrap(), v4);
        }
    }

    #[test]
    fn v5_only_codes_do_not_downgrade() {
        assert_eq!(
            ConnectReturnCode::try_from(ConnectReasonCode::Banned),
            Err(Error::InvalidReason {
                packet: PacketType::ConnAck,
                code: 0x8A
            })
        );
    }
}
