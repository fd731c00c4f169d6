use crate::{reason, CommonReasonCode, Error, PacketType, ReasonCode};

/// Auth packet reason code
///
/// Exchanged in both directions during extended authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AuthReasonCode {
    /// Authentication is successful. Only the server concludes an exchange.
    Success = reason::SUCCESS,
    /// Continue the authentication with another step
    ContinueAuthentication = reason::CONTINUE_AUTHENTICATION,
    /// Initiate a re-authentication. Only the client starts one.
    ReAuthenticate = reason::RE_AUTHENTICATE,
}

impl ReasonCode for AuthReasonCode {
    const PACKET_TYPE: PacketType = PacketType::Auth;
    const ALL: &'static [Self] = &[
        Self::Success,
        Self::ContinueAuthentication,
        Self::ReAuthenticate,
    ];

    #[inline]
    fn code(self) -> u8 {
        self as u8
    }

    fn can_be_sent_by_server(self) -> bool {
        self != Self::ReAuthenticate
    }

    fn can_be_sent_by_client(self) -> bool {
        self != Self::Success
    }

    fn common(self) -> Option<CommonReasonCode> {
        match self {
            Self::Success => Some(CommonReasonCode::Success),
            Self::ContinueAuthentication | Self::ReAuthenticate => None,
        }
    }
}

impl TryFrom<u8> for AuthReasonCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        reason::decode(value)
    }
}
