use crate::{reason, CommonReasonCode, Error, PacketType, ReasonCode};

/// Disconnect Reason Code
///
/// Sent by the client or the server in the final MQTT packet of a connection.
/// Some codes are reserved to one side; the rules follow the
/// "Sent by" column of the MQTT 5.0 specification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DisconnectReasonCode {
    #[default]
    /// Close the connection normally. Do not send the Will Message.
    NormalDisconnection = reason::NORMAL_DISCONNECTION,
    /// The Client wishes to disconnect but requires that the Server also publishes its Will Message.
    DisconnectWithWillMessage = reason::DISCONNECT_WITH_WILL_MESSAGE,
    /// The Connection is closed but the sender either does not wish to reveal the reason, or none of the other Reason Codes apply.
    UnspecifiedError = reason::UNSPECIFIED_ERROR,
    /// The received packet does not conform to this specification.
    MalformedPacket = reason::MALFORMED_PACKET,
    /// An unexpected or out of order packet was received.
    ProtocolError = reason::PROTOCOL_ERROR,
    /// The packet received is valid but cannot be processed by this implementation.
    ImplementationSpecificError = reason::IMPLEMENTATION_SPECIFIC_ERROR,
    /// The request is not authorized.
    NotAuthorized = reason::NOT_AUTHORIZED,
    /// The Server is busy and cannot continue processing requests from this Client.
    ServerBusy = reason::SERVER_BUSY,
    /// The Server is shutting down.
    ServerShuttingDown = reason::SERVER_SHUTTING_DOWN,
    /// The Connection is closed because no packet has been received for 1.5 times the Keepalive time.
    KeepAliveTimeout = reason::KEEP_ALIVE_TIMEOUT,
    /// Another Connection using the same ClientID has connected causing this Connection to be closed.
    SessionTakenOver = reason::SESSION_TAKEN_OVER,
    /// The Topic Filter is correctly formed, but is not accepted by this Sever.
    TopicFilterInvalid = reason::TOPIC_FILTER_INVALID,
    /// The Topic Name is correctly formed, but is not accepted by this Client or Server.
    TopicNameInvalid = reason::TOPIC_NAME_INVALID,
    /// The Client or Server has received more than Receive Maximum publication for which it has not sent PUBACK or PUBCOMP.
    ReceiveMaximumExceeded = reason::RECEIVE_MAXIMUM_EXCEEDED,
    /// The Client or Server has received a PUBLISH packet containing a Topic Alias which is greater than
    /// the Maximum Topic Alias it sent in the CONNECT or CONNACK packet.
    TopicAliasInvalid = reason::TOPIC_ALIAS_INVALID,
    /// The packet size is greater than Maximum Packet Size for this Client or Server.
    PacketTooLarge = reason::PACKET_TOO_LARGE,
    /// The received data rate is too high.
    MessageRateTooHigh = reason::MESSAGE_RATE_TOO_HIGH,
    /// An implementation or administrative imposed limit has been exceeded.
    QuotaExceeded = reason::QUOTA_EXCEEDED,
    /// The Connection is closed due to an administrative action.
    AdministrativeAction = reason::ADMINISTRATIVE_ACTION,
    /// The payload format does not match the one specified by the Payload Format Indicator.
    PayloadFormatInvalid = reason::PAYLOAD_FORMAT_INVALID,
    /// The Server has does not support retained messages.
    RetainNotSupported = reason::RETAIN_NOT_SUPPORTED,
    /// The Client specified a QoS greater than the QoS specified in a Maximum QoS in the CONNACK.
    QoSNotSupported = reason::QOS_NOT_SUPPORTED,
    /// The Client should temporarily change its Server.
    UseAnotherServer = reason::USE_ANOTHER_SERVER,
    /// The Server is moved and the Client should permanently change its server location.
    ServerMoved = reason::SERVER_MOVED,
    /// The Server does not support Shared Subscriptions.
    SharedSubscriptionsNotSupported = reason::SHARED_SUBSCRIPTIONS_NOT_SUPPORTED,
    /// This connection is closed because the connection rate is too high.
    ConnectionRateExceeded = reason::CONNECTION_RATE_EXCEEDED,
    /// The maximum connection time authorized for this connection has been exceeded.
    MaximumConnectTime = reason::MAXIMUM_CONNECT_TIME,
    /// The Server does not support Subscription Identifiers; the subscription is not accepted.
    SubscriptionIdentifiersNotSupported = reason::SUBSCRIPTION_IDENTIFIERS_NOT_SUPPORTED,
    /// The Server does not support Wildcard subscription; the subscription is not accepted.
    WildcardSubscriptionsNotSupported = reason::WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED,
}

impl ReasonCode for DisconnectReasonCode {
    const PACKET_TYPE: PacketType = PacketType::Disconnect;
    const ALL: &'static [Self] = &[
        Self::NormalDisconnection,
        Self::DisconnectWithWillMessage,
        Self::UnspecifiedError,
        Self::MalformedPacket,
        Self::ProtocolError,
        Self::ImplementationSpecificError,
        Self::NotAuthorized,
        Self::ServerBusy,
        Self::ServerShuttingDown,
        Self::KeepAliveTimeout,
        Self::SessionTakenOver,
        Self::TopicFilterInvalid,
        Self::TopicNameInvalid,
        Self::ReceiveMaximumExceeded,
        Self::TopicAliasInvalid,
        Self::PacketTooLarge,
        Self::MessageRateTooHigh,
        Self::QuotaExceeded,
        Self::AdministrativeAction,
        Self::PayloadFormatInvalid,
        Self::RetainNotSupported,
        Self::QoSNotSupported,
        Self::UseAnotherServer,
        Self::ServerMoved,
        Self::SharedSubscriptionsNotSupported,
        Self::ConnectionRateExceeded,
        Self::MaximumConnectTime,
        Self::SubscriptionIdentifiersNotSupported,
        Self::WildcardSubscriptionsNotSupported,
    ];

    #[inline]
    fn code(self) -> u8 {
        self as u8
    }

    fn can_be_sent_by_server(self) -> bool {
        self != Self::DisconnectWithWillMessage
    }

    fn can_be_sent_by_client(self) -> bool {
        !matches!(
            self,
            Self::NotAuthorized
                | Self::ServerBusy
                | Self::ServerShuttingDown
                | Self::KeepAliveTimeout
                | Self::SessionTakenOver
                | Self::TopicFilterInvalid
                | Self::RetainNotSupported
                | Self::QoSNotSupported
                | Self::UseAnotherServer
                | Self::ServerMoved
                | Self::SharedSubscriptionsNotSupported
                | Self::ConnectionRateExceeded
                | Self::MaximumConnectTime
                | Self::SubscriptionIdentifiersNotSupported
                | Self::WildcardSubscriptionsNotSupported
        )
    }

    // Normal disconnection shares its byte with SUCCESS but is its own outcome
    fn common(self) -> Option<CommonReasonCode> {
        let common = match self {
            Self::UnspecifiedError => CommonReasonCode::UnspecifiedError,
            Self::MalformedPacket => CommonReasonCode::MalformedPacket,
            Self::ProtocolError => CommonReasonCode::ProtocolError,
            Self::ImplementationSpecificError => CommonReasonCode::ImplementationSpecificError,
            Self::NotAuthorized => CommonReasonCode::NotAuthorized,
            Self::ServerBusy => CommonReasonCode::ServerBusy,
            Self::TopicFilterInvalid => CommonReasonCode::TopicFilterInvalid,
            Self::TopicNameInvalid => CommonReasonCode::TopicNameInvalid,
            Self::PacketTooLarge => CommonReasonCode::PacketTooLarge,
            Self::QuotaExceeded => CommonReasonCode::QuotaExceeded,
            Self::PayloadFormatInvalid => CommonReasonCode::PayloadFormatInvalid,
            Self::RetainNotSupported => CommonReasonCode::RetainNotSupported,
            Self::QoSNotSupported => CommonReasonCode::QoSNotSupported,
            Self::UseAnotherServer => CommonReasonCode::UseAnotherServer,
            Self::ServerMoved => CommonReasonCode::ServerMoved,
            Self::SharedSubscriptionsNotSupported => {
                CommonReasonCode::SharedSubscriptionsNotSupported
            }
            Self::ConnectionRateExceeded => CommonReasonCode::ConnectionRateExceeded,
            Self::SubscriptionIdentifiersNotSupported => {
                CommonReasonCode::SubscriptionIdentifiersNotSupported
            }
            Self::WildcardSubscriptionsNotSupported => {
                CommonReasonCode::WildcardSubscriptionsNotSupported
            }
            Self::NormalDisconnection
            | Self::DisconnectWithWillMessage
            | Self::ServerShuttingDown
            | Self::KeepAliveTimeout
            | Self::SessionTakenOver
            | Self::ReceiveMaximumExceeded
            | Self::TopicAliasInvalid
            | Self::MessageRateTooHigh
            | Self::AdministrativeAction
            | Self::MaximumConnectTime => return None,
        };
        Some(common)
    }
}

impl TryFrom<u8> for DisconnectReasonCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        reason::decode(value)
    }
}
