use crate::{reason, CommonReasonCode, Error, PacketType, QoS, ReasonCode};

/// Reason code in SUBACK, one per topic filter of the SUBSCRIBE packet
///
/// Sent by the server to the client to confirm receipt and processing of a SUBSCRIBE packet.
/// A successful subscription reports the maximum QoS that was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeReasonCode {
    Success(QoS),
    Unspecified,
    ImplementationSpecific,
    NotAuthorized,
    TopicFilterInvalid,
    PkidInUse,
    QuotaExceeded,
    SharedSubscriptionsNotSupported,
    SubscriptionIdNotSupported,
    WildcardSubscriptionsNotSupported,
}

impl ReasonCode for SubscribeReasonCode {
    const PACKET_TYPE: PacketType = PacketType::SubAck;
    const ALL: &'static [Self] = &[
        Self::Success(QoS::AtMostOnce),
        Self::Success(QoS::AtLeastOnce),
        Self::Success(QoS::ExactlyOnce),
        Self::Unspecified,
        Self::ImplementationSpecific,
        Self::NotAuthorized,
        Self::TopicFilterInvalid,
        Self::PkidInUse,
        Self::QuotaExceeded,
        Self::SharedSubscriptionsNotSupported,
        Self::SubscriptionIdNotSupported,
        Self::WildcardSubscriptionsNotSupported,
    ];

    fn code(self) -> u8 {
        match self {
            Self::Success(QoS::AtMostOnce) => reason::GRANTED_QOS_0,
            Self::Success(QoS::AtLeastOnce) => reason::GRANTED_QOS_1,
            Self::Success(QoS::ExactlyOnce) => reason::GRANTED_QOS_2,
            Self::Unspecified => reason::UNSPECIFIED_ERROR,
            Self::ImplementationSpecific => reason::IMPLEMENTATION_SPECIFIC_ERROR,
            Self::NotAuthorized => reason::NOT_AUTHORIZED,
            Self::TopicFilterInvalid => reason::TOPIC_FILTER_INVALID,
            Self::PkidInUse => reason::PACKET_IDENTIFIER_IN_USE,
            Self::QuotaExceeded => reason::QUOTA_EXCEEDED,
            Self::SharedSubscriptionsNotSupported => reason::SHARED_SUBSCRIPTIONS_NOT_SUPPORTED,
            Self::SubscriptionIdNotSupported => reason::SUBSCRIPTION_IDENTIFIERS_NOT_SUPPORTED,
            Self::WildcardSubscriptionsNotSupported => {
                reason::WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED
            }
        }
    }

    fn can_be_sent_by_client(self) -> bool {
        false
    }

    // Granted QoS 0 shares its byte with SUCCESS but is its own outcome
    fn common(self) -> Option<CommonReasonCode> {
        let common = match self {
            Self::Success(_) => return None,
            Self::Unspecified => CommonReasonCode::UnspecifiedError,
            Self::ImplementationSpecific => CommonReasonCode::ImplementationSpecificError,
            Self::NotAuthorized => CommonReasonCode::NotAuthorized,
            Self::TopicFilterInvalid => CommonReasonCode::TopicFilterInvalid,
            Self::PkidInUse => CommonReasonCode::PacketIdentifierInUse,
            Self::QuotaExceeded => CommonReasonCode::QuotaExceeded,
            Self::SharedSubscriptionsNotSupported => {
                CommonReasonCode::SharedSubscriptionsNotSupported
            }
            Self::SubscriptionIdNotSupported => {
                CommonReasonCode::SubscriptionIdentifiersNotSupported
            }
            Self::WildcardSubscriptionsNotSupported => {
                CommonReasonCode::WildcardSubscriptionsNotSupported
            }
        };
        Some(common)
    }
}

impl TryFrom<u8> for SubscribeReasonCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        reason::decode(value)
    }
}

impl From<SubscribeReasonCode> for u8 {
    fn from(value: SubscribeReasonCode) -> u8 {
        value.code()
    }
}
