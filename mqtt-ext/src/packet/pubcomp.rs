use crate::{reason, CommonReasonCode, Error, PacketType, ReasonCode};

/// Reason code in PUBCOMP
///
/// Response to a PUBREL packet.
/// It is the fourth and final packet of the QoS 2 protocol exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PubCompReasonCode {
    Success = reason::SUCCESS,
    PacketIdentifierNotFound = reason::PACKET_IDENTIFIER_NOT_FOUND,
}

impl ReasonCode for PubCompReasonCode {
    const PACKET_TYPE: PacketType = PacketType::PubComp;
    const ALL: &'static [Self] = &[Self::Success, Self::PacketIdentifierNotFound];

    #[inline]
    fn code(self) -> u8 {
        self as u8
    }

    fn common(self) -> Option<CommonReasonCode> {
        match self {
            Self::Success => Some(CommonReasonCode::Success),
            Self::PacketIdentifierNotFound => Some(CommonReasonCode::PacketIdentifierNotFound),
        }
    }
}

impl TryFrom<u8> for PubCompReasonCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        reason::decode(value)
    }
}
