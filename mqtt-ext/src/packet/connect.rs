use bytes::Bytes;

use crate::{PayloadFormatIndicator, QoS};

/// Stored message expiry interval of a will that does not expire.
///
/// The protocol encodes the interval in four bytes, so this value can never
/// come off the wire.
pub const MESSAGE_EXPIRY_INTERVAL_NOT_SET: u64 = u64::MAX;

/// LastWill that broker forwards on behalf of the client
///
/// Decoded from the will properties and payload of a CONNECT packet.
/// Optional properties that were absent on the wire are `None`, except for
/// the message expiry interval which holds [`MESSAGE_EXPIRY_INTERVAL_NOT_SET`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastWill {
    pub topic: String,
    pub qos: QoS,
    pub retain: bool,
    pub payload: Option<Bytes>,
    pub payload_format_indicator: Option<PayloadFormatIndicator>,
    /// Seconds the broker waits after the connection closes before publishing
    pub will_delay_interval: Option<u32>,
    /// Seconds, or [`MESSAGE_EXPIRY_INTERVAL_NOT_SET`]
    pub message_expiry_interval: u64,
    pub response_topic: Option<String>,
    pub correlation_data: Option<Bytes>,
    pub content_type: Option<String>,
    /// In the order they were received, names may repeat
    pub user_properties: Vec<(String, String)>,
}

impl LastWill {
    pub fn new(
        topic: impl Into<String>,
        payload: impl Into<Bytes>,
        qos: QoS,
        retain: bool,
    ) -> Self {
        Self {
            topic: topic.into(),
            qos,
            retain,
            payload: Some(payload.into()),
            payload_format_indicator: None,
            will_delay_interval: None,
            message_expiry_interval: MESSAGE_EXPIRY_INTERVAL_NOT_SET,
            response_topic: None,
            correlation_data: None,
            content_type: None,
            user_properties: Vec::new(),
        }
    }

    pub fn with_payload_format_indicator(mut self, indicator: PayloadFormatIndicator) -> Self {
        self.payload_format_indicator = Some(indicator);
        self
    }

    pub fn with_will_delay_interval(mut self, seconds: u32) -> Self {
        self.will_delay_interval = Some(seconds);
        self
    }

    pub fn with_message_expiry_interval(mut self, seconds: u32) -> Self {
        self.message_expiry_interval = u64::from(seconds);
        self
    }

    pub fn with_response_topic(mut self, topic: impl Into<String>) -> Self {
        self.response_topic = Some(topic.into());
        self
    }

    pub fn with_correlation_data(mut self, data: impl Into<Bytes>) -> Self {
        self.correlation_data = Some(data.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Appends a user property, keeping any earlier property with the same name
    pub fn with_user_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.user_properties.push((name.into(), value.into()));
        self
    }

    /// Removes the payload, as done for a will without application data
    pub fn without_payload(mut self) -> Self {
        self.payload = None;
        self
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::packet::tests::{USER_PROP_KEY, USER_PROP_VAL};

    #[test]
    fn new_will_has_no_optional_properties() {
        let will = LastWill::new("a/b", "bye", QoS::AtLeastOnce, true);

        assert_eq!(will.payload, Some(Bytes::from_static(b"bye")));
        assert_eq!(will.payload_format_indicator, None);
        assert_eq!(will.will_delay_interval, None);
        assert_eq!(will.message_expiry_interval, MESSAGE_EXPIRY_INTERVAL_NOT_SET);
        assert_eq!(will.response_topic, None);
        assert!(will.user_properties.is_empty());
    }

    #[test]
    fn expiry_interval_cannot_reach_the_sentinel() {
        let will = LastWill::new("a/b", "bye", QoS::AtMostOnce, false)
            .with_message_expiry_interval(u32::MAX);

        assert_eq!(will.message_expiry_interval, u64::from(u32::MAX));
        assert!(will.message_expiry_interval < MESSAGE_EXPIRY_INTERVAL_NOT_SET);
    }

    #[test]
    fn will_delay_is_independent_of_expiry() {
        let will =
            LastWill::new("a/b", "bye", QoS::AtMostOnce, false).with_will_delay_interval(0);

        assert_eq!(will.will_delay_interval, Some(0));
        assert_eq!(will.message_expiry_interval, MESSAGE_EXPIRY_INTERVAL_NOT_SET);

        let will = will.with_will_delay_interval(300);
        assert_eq!(will.will_delay_interval, Some(300));
    }

    #[test]
    fn user_properties_keep_duplicates_in_order() {
        let will = LastWill::new("a/b", "bye", QoS::AtMostOnce, false)
            .with_user_property(USER_PROP_KEY, USER_PROP_VAL)
            .with_user_property("other", "x")
            .with_user_property(USER_PROP_KEY, "second");

        assert_eq!(
            will.user_properties,
            vec![
                (USER_PROP_KEY.to_owned(), USER_PROP_VAL.to_owned()),
                ("other".to_owned(), "x".to_owned()),
                (USER_PROP_KEY.to_owned(), "second".to_owned()),
            ]
        );
    }
}
