use crate::{reason, CommonReasonCode, Error, PacketType, ReasonCode};

/// Reason code in UNSUBACK, one per topic filter of the UNSUBSCRIBE packet
///
/// Sent by the server to the client to confirm receipt of an UNSUBSCRIBE packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum UnsubscribeReasonCode {
    Success = reason::SUCCESS,
    NoSubscriptionExisted = reason::NO_SUBSCRIPTION_EXISTED,
    UnspecifiedError = reason::UNSPECIFIED_ERROR,
    ImplementationSpecificError = reason::IMPLEMENTATION_SPECIFIC_ERROR,
    NotAuthorized = reason::NOT_AUTHORIZED,
    TopicFilterInvalid = reason::TOPIC_FILTER_INVALID,
    PacketIdentifierInUse = reason::PACKET_IDENTIFIER_IN_USE,
}

impl ReasonCode for UnsubscribeReasonCode {
    const PACKET_TYPE: PacketType = PacketType::UnsubAck;
    const ALL: &'static [Self] = &[
        Self::Success,
        Self::NoSubscriptionExisted,
        Self::UnspecifiedError,
        Self::ImplementationSpecificError,
        Self::NotAuthorized,
        Self::TopicFilterInvalid,
        Self::PacketIdentifierInUse,
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
            Self::NoSubscriptionExisted => return None,
            Self::UnspecifiedError => CommonReasonCode::UnspecifiedError,
            Self::ImplementationSpecificError => CommonReasonCode::ImplementationSpecificError,
            Self::NotAuthorized => CommonReasonCode::NotAuthorized,
            Self::TopicFilterInvalid => CommonReasonCode::TopicFilterInvalid,
            Self::PacketIdentifierInUse => CommonReasonCode::PacketIdentifierInUse,
        };
        Some(common)
    }
}

impl TryFrom<u8> for UnsubscribeReasonCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        reason::decode(value)
    }
}
