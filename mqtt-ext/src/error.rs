use crate::{PacketType, Sender};

/// Error raised when a byte cannot be mapped onto a protocol value
/// or a reason code is used in the wrong direction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid {packet:?} reason code = {code:#04x}")]
    InvalidReason { packet: PacketType, code: u8 },
    #[error("Invalid QoS level = {0}")]
    InvalidQoS(u8),
    #[error("Invalid payload format indicator = {0}")]
    InvalidPayloadFormatIndicator(u8),
    #[error("Invalid packet type = {0}")]
    InvalidPacketType(u8),
    #[error("{packet:?} reason code {code:#04x} must not be sent by the {sender}")]
    IllegalDirection {
        packet: PacketType,
        code: u8,
        sender: Sender,
    },
}
