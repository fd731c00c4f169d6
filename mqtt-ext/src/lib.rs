//! MQTT 5 reason codes and extension packet views
//!
//! This crate models the reason codes carried by MQTT 5.0 control packets and
//! the read-only views that hand broker-internal messages to extension code.
//!
//! Every packet type that carries a reason code has its own closed registry
//! (see [`ReasonCode`]). A registry knows the exact wire byte of each of its
//! members, whether a member may be sent by the server or by the client, and
//! nothing else: a byte that is legal in one registry says nothing about
//! another registry.
//!
//! The [`extension`] module contains the stable contract consumed by
//! extensions, most notably the [`extension::PublishPacket`] trait and the
//! adapters that implement it on top of [`LastWill`] and [`Publish`].
//!
//! ```
//! use mqtt_ext::extension::{AckReasonCode, PublishPacket, WillPublishPacket};
//! use mqtt_ext::{LastWill, PubAckReasonCode, QoS, ReasonCode, Sender};
//!
//! let will = LastWill::new("clients/7/status", "offline", QoS::AtLeastOnce, false);
//! let view = WillPublishPacket::new(&will);
//! assert_eq!(view.message_expiry_interval(), None);
//!
//! let reason = PubAckReasonCode::from(AckReasonCode::NoMatchingSubscribers);
//! assert_eq!(reason.code(), 0x10);
//! assert!(reason.ensure_sendable(Sender::Client).is_err());
//! ```

mod error;
pub mod extension;
mod packet;
mod reason;

pub use error::Error;
pub use packet::*;
pub use reason::{CommonReasonCode, ReasonCode, Sender};

/// Quality of Service levels for packet delivery.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
#[allow(clippy::enum_variant_names)]
pub enum QoS {
    AtMostOnce = 0,
    AtLeastOnce = 1,
    ExactlyOnce = 2,
}

impl Default for QoS {
    fn default() -> Self {
        Self::AtMostOnce
    }
}

impl TryFrom<u8> for QoS {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(QoS::AtMostOnce),
            1 => Ok(QoS::AtLeastOnce),
            2 => Ok(QoS::ExactlyOnce),
            qos => Err(Error::InvalidQoS(qos)),
        }
    }
}

/// Payload Format Indicator of a PUBLISH or will message
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormatIndicator {
    /// The payload is unspecified bytes
    Unspecified = 0,
    /// The payload is UTF-8 encoded character data
    Utf8 = 1,
}

impl TryFrom<u8> for PayloadFormatIndicator {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PayloadFormatIndicator::Unspecified),
            1 => Ok(PayloadFormatIndicator::Utf8),
            other => Err(Error::InvalidPayloadFormatIndicator(other)),
        }
    }
}
