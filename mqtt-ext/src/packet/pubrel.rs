use crate::{reason, CommonReasonCode, Error, PacketType, ReasonCode};

/// Reason code in PUBREL
///
/// Response to a PUBREC packet.
/// It is the third packet of the QoS 2 protocol exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PubRelReasonCode {
    Success = reason::SUCCESS,
    PacketIdentifierNotFound = reason::PACKET_IDENTIFIER_NOT_FOUND,
}

impl ReasonCode for PubRelReasonCode {
    const PACKET_TYPE: PacketType = PacketType::PubRel;
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

impl TryFrom<u8> for PubRelReasonCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        reason::decode(value)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reason::registry_tests::{check_registry, wire_values};
    use crate::Sender;

    #[test]
    fn registry_properties() {
        check_registry::<PubRelReasonCode>();
    }

    #[test]
    fn protocol_bytes() {
        wire_values(&[
            (PubRelReasonCode::Success, 0x00),
            (PubRelReasonCode::PacketIdentifierNotFound, 0x92),
        ]);
        assert_eq!(
            PubRelReasonCode::PacketIdentifierNotFound.common(),
            Some(CommonReasonCode::PacketIdentifierNotFound)
        );
    }

    #[test]
    fn sent_in_both_directions() {
        for &reason in PubRelReasonCode::ALL {
            assert!(reason.can_be_sent_by(Sender::Server));
            assert!(reason.can_be_sent_by(Sender::Client));
        }
    }

    #[test]
    fn puback_errors_are_not_pubrel_codes() {
        assert_eq!(
            PubRelReasonCode::try_from(0x92u8),
            Ok(PubRelReasonCode::PacketIdentifierNotFound)
        );
        assert_eq!(PubRelReasonCode::from_code(0x80), None);
        assert_eq!(PubRelReasonCode::from_code(0x10), None);
    }
}
