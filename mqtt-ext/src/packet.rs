//! This module defines the reason code registries of the MQTT control packets
//! and the broker-internal message model that packet views are built on.
//!
//! ## Registries
//!
//! Every packet type that carries a reason code has its own enum implementing
//! [`ReasonCode`](crate::ReasonCode). The enums are closed: decoding a byte
//! that the packet type does not define fails, even when the same byte is a
//! valid reason code of another packet type.
//!
//! ## Messages
//!
//! [`LastWill`] and [`Publish`] are the internal, protocol-specific message
//! types. They are produced by the decoder of the enclosing broker and are
//! never handed to extensions directly; see [`crate::extension`] instead.

use crate::Error;

mod auth;
mod connack;
mod connect;
mod disconnect;
mod puback;
mod pubcomp;
mod publish;
mod pubrec;
mod pubrel;
mod suback;
mod unsuback;

pub use auth::AuthReasonCode;
pub use connack::{ConnectReasonCode, ConnectReturnCode};
pub use connect::{LastWill, MESSAGE_EXPIRY_INTERVAL_NOT_SET};
pub use disconnect::DisconnectReasonCode;
pub use puback::PubAckReasonCode;
pub use pubcomp::PubCompReasonCode;
pub use publish::{Publish, PublishProperties};
pub use pubrec::PubRecReasonCode;
pub use pubrel::PubRelReasonCode;
pub use suback::SubscribeReasonCode;
pub use unsuback::UnsubscribeReasonCode;

/// MQTT packet types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketType {
    /// Connection request
    Connect = 1,
    /// Connect acknowledgment
    ConnAck,
    /// Publish message
    Publish,
    /// Publish acknowledgment (QoS 1)
    PubAck,
    /// Publish received (QoS 2 delivery part 1)
    PubRec,
    /// Publish release (QoS 2 delivery part 2)
    PubRel,
    /// Publish complete (QoS 2 delivery part 3)
    PubComp,
    /// Subscribe request
    Subscribe,
    /// Subscribe acknowledgment
    SubAck,
    /// Unsubscribe request
    Unsubscribe,
    /// Unsubscribe acknowledgment
    UnsubAck,
    /// PING request
    PingReq,
    /// PING response
    PingResp,
    /// Disconnect notification
    Disconnect,
    /// Authentication exchange
    Auth,
}

impl TryFrom<u8> for PacketType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PacketType::Connect),
            2 => Ok(PacketType::ConnAck),
            3 => Ok(PacketType::Publish),
            4 => Ok(PacketType::PubAck),
            5 => Ok(PacketType::PubRec),
            6 => Ok(PacketType::PubRel),
            7 => Ok(PacketType::PubComp),
            8 => Ok(PacketType::Subscribe),
            9 => Ok(PacketType::SubAck),
            10 => Ok(PacketType::Unsubscribe),
            11 => Ok(PacketType::UnsubAck),
            12 => Ok(PacketType::PingReq),
            13 => Ok(PacketType::PingResp),
            14 => Ok(PacketType::Disconnect),
            15 => Ok(PacketType::Auth),
            x => Err(Error::InvalidPacketType(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    // These are used in tests by packets
    pub const USER_PROP_KEY: &str = "property";
    pub const USER_PROP_VAL: &str = "a value";

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn packet_type_from_control_nibble() {
        assert_eq!(PacketType::try_from(4u8).unwrap(), PacketType::PubAck);
        assert_eq!(PacketType::try_from(15u8).unwrap(), PacketType::Auth);
        assert!(matches!(
            PacketType::try_from(0u8),
            Err(Error::InvalidPacketType(0))
        ));
    }
}
