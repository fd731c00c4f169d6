//! Stable types handed to broker extensions
//!
//! Extensions never see the broker-internal message types. They receive
//! read-only views implementing [`PublishPacket`], and report outcomes with
//! the coarse [`AckReasonCode`], which the broker translates into the reason
//! code of the acknowledgement it actually sends.
//!
//! The enums in this module mirror internal ones by name. The conversions
//! between them are exhaustive matches, so adding a variant on either side
//! fails to compile until the mapping is extended.

use crate::QoS;

mod publish;
mod user_properties;

pub use publish::{PublishPacket, PublishPacketView, WillPublishPacket};
pub use user_properties::{UserProperties, UserPropertiesIter, UserProperty};

/// Quality of Service level as seen by extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qos {
    AtMostOnce,
    AtLeastOnce,
    ExactlyOnce,
}

impl Qos {
    /// The QoS number used by the protocol
    pub fn qos_number(self) -> u8 {
        match self {
            Qos::AtMostOnce => 0,
            Qos::AtLeastOnce => 1,
            Qos::ExactlyOnce => 2,
        }
    }
}

impl From<QoS> for Qos {
    fn from(value: QoS) -> Self {
        match value {
            QoS::AtMostOnce => Qos::AtMostOnce,
            QoS::AtLeastOnce => Qos::AtLeastOnce,
            QoS::ExactlyOnce => Qos::ExactlyOnce,
        }
    }
}

/// Payload Format Indicator as seen by extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormatIndicator {
    Unspecified,
    Utf8,
}

impl From<crate::PayloadFormatIndicator> for PayloadFormatIndicator {
    fn from(value: crate::PayloadFormatIndicator) -> Self {
        match value {
            crate::PayloadFormatIndicator::Unspecified => PayloadFormatIndicator::Unspecified,
            crate::PayloadFormatIndicator::Utf8 => PayloadFormatIndicator::Utf8,
        }
    }
}

/// Outcome an extension may choose when acknowledging a PUBLISH.
///
/// Converts into [`PubAckReasonCode`](crate::PubAckReasonCode) and
/// [`PubRecReasonCode`](crate::PubRecReasonCode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckReasonCode {
    Success,
    NoMatchingSubscribers,
    UnspecifiedError,
    ImplementationSpecificError,
    NotAuthorized,
    TopicNameInvalid,
    PacketIdentifierInUse,
    QuotaExceeded,
    PayloadFormatInvalid,
}

impl AckReasonCode {
    pub const ALL: &'static [AckReasonCode] = &[
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
}
