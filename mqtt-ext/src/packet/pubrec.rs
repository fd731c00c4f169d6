use crate::extension::AckReasonCode;
use crate::{reason, CommonReasonCode, Error, PacketType, ReasonCode};

/// Reason code in PUBREC
///
/// Response to a PUBLISH packet with QoS 2.
/// It is the second packet of the QoS 2 protocol exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PubRecReasonCode {
    /// The message is accepted. Publication of the QoS 2 message proceeds.
    Success = reason::SUCCESS,
    /// The message is accepted but there are no subscribers
    NoMatchingSubscribers = reason::NO_MATCHING_SUBSCRIBERS,
    /// The receiver does not accept the publish and gives no further reason
    UnspecifiedError = reason::UNSPECIFIED_ERROR,
    /// The PUBLISH is valid but the receiver is not willing to accept it
    ImplementationSpecificError = reason::IMPLEMENTATION_SPECIFIC_ERROR,
    /// The PUBLISH is not authorized
    NotAuthorized = reason::NOT_AUTHORIZED,
    /// The topic name is well formed but not accepted by the receiver
    TopicNameInvalid = reason::TOPIC_NAME_INVALID,
    /// The packet identifier is already in use
    PacketIdentifierInUse = reason::PACKET_IDENTIFIER_IN_USE,
    /// An implementation or administrative imposed limit has been exceeded
    QuotaExceeded = reason::QUOTA_EXCEEDED,
    /// The payload does not match the payload format indicator
    PayloadFormatInvalid = reason::PAYLOAD_FORMAT_INVALID,
}

impl ReasonCode for PubRecReasonCode {
    const PACKET_TYPE: PacketType = PacketType::PubRec;
    const ALL: &'static [Self] = &[
        Self::Success,
        Self::NoMatchingSubscribers,
        Self::UnspecifiedError,
        Self::ImplementationSpecificError,
        Self::NotAuthorized,
        Self::TopicNameInvalid,
        Self::PacketIdentifierInUse,
        Self::QuotaExceeded,
        Self::PayloadFormatInvalid,
    ];

    #[inline]
    fn code(self) -> u8 {
        self as u8
    }

    fn can_be_sent_by_client(self) -> bool {
        self != Self::NoMatchingSubscribers
    }

    fn common(self) -> Option<CommonReasonCode> {
        let common = match self {
            Self::Success => CommonReasonCode::Success,
            Self::NoMatchingSubscribers => CommonReasonCode::NoMatchingSubscribers,
            Self::UnspecifiedError => CommonReasonCode::UnspecifiedError,
            Self::ImplementationSpecificError => CommonReasonCode::ImplementationSpecificError,
            Self::NotAuthorized => CommonReasonCode::NotAuthorized,
            Self::TopicNameInvalid => CommonReasonCode::TopicNameInvalid,
            Self::PacketIdentifierInUse => CommonReasonCode::PacketIdentifierInUse,
            Self::QuotaExceeded => CommonReasonCode::QuotaExceeded,
            Self::PayloadFormatInvalid => CommonReasonCode::PayloadFormatInvalid,
        };
        Some(common)
    }
}

impl TryFrom<u8> for PubRecReasonCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        reason::decode(value)
    }
}

impl From<AckReasonCode> for PubRecReasonCode {
    fn from(value: AckReasonCode) -> Self {
        match value {
            AckReasonCode::Success => Self::Success,
            AckReasonCode::NoMatchingSubscribers => Self::NoMatchingSubscribers,
            AckReasonCode::UnspecifiedError => Self::UnspecifiedError,
            AckReasonCode::ImplementationSpecificError => Self::ImplementationSpecificError,
            AckReasonCode::NotAuthorized => Self::NotAuthorized,
            AckReasonCode::TopicNameInvalid => Self::TopicNameInvalid,
            AckReasonCode::PacketIdentifierInUse => Self::PacketIdentifierInUse,
            AckReasonCode::QuotaExceeded => Self::QuotaExceeded,
            AckReasonCode::PayloadFormatInvalid => Self::PayloadFormatInvalid,
        }
    }
}
