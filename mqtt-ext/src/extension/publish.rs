//! Read-only PUBLISH views
//!
//! The views borrow the internal message, so it cannot change while an
//! extension reads it. Byte buffers are handed out as [`Bytes`], which share
//! the underlying allocation and offer no way to modify it.

use bytes::Bytes;

use super::{PayloadFormatIndicator, Qos, UserProperties};
use crate::{LastWill, Publish, MESSAGE_EXPIRY_INTERVAL_NOT_SET};

/// The PUBLISH contract exposed to extensions.
///
/// Every accessor is side-effect free and total.
pub trait PublishPacket {
    /// Whether this is a redelivery of an earlier attempt
    fn dup_flag(&self) -> bool;

    fn qos(&self) -> Qos;

    fn retain(&self) -> bool;

    fn topic(&self) -> &str;

    /// Packet identifier, `0` for QoS 0 messages
    fn packet_id(&self) -> u16;

    fn payload_format_indicator(&self) -> Option<PayloadFormatIndicator>;

    /// Message expiry interval in seconds
    fn message_expiry_interval(&self) -> Option<u64>;

    fn response_topic(&self) -> Option<&str>;

    fn correlation_data(&self) -> Option<Bytes>;

    fn subscription_identifiers(&self) -> &[u32];

    fn content_type(&self) -> Option<&str>;

    fn payload(&self) -> Option<Bytes>;

    fn user_properties(&self) -> UserProperties<'_>;
}

/// A will message presented as a PUBLISH.
///
/// A will is always published fresh and outside any acknowledgement flow
/// or subscription: its dup flag is `false`, its packet identifier is `0` and
/// it carries no subscription identifiers.
#[derive(Debug, Clone, Copy)]
pub struct WillPublishPacket<'a> {
    will: &'a LastWill,
}

impl<'a> WillPublishPacket<'a> {
    pub fn new(will: &'a LastWill) -> Self {
        Self { will }
    }

    /// Seconds between the end of the connection and the publication of the
    /// will, `None` if it is published immediately
    pub fn will_delay_interval(&self) -> Option<u32> {
        self.will.will_delay_interval
    }
}

impl PublishPacket for WillPublishPacket<'_> {
    fn dup_flag(&self) -> bool {
        false
    }

    fn qos(&self) -> Qos {
        self.will.qos.into()
    }

    fn retain(&self) -> bool {
        self.will.retain
    }

    fn topic(&self) -> &str {
        &self.will.topic
    }

    fn packet_id(&self) -> u16 {
        0
    }

    fn payload_format_indicator(&self) -> Option<PayloadFormatIndicator> {
        self.will.payload_format_indicator.map(Into::into)
    }

    fn message_expiry_interval(&self) -> Option<u64> {
        match self.will.message_expiry_interval {
            MESSAGE_EXPIRY_INTERVAL_NOT_SET => None,
            interval => Some(interval),
        }
    }

    fn response_topic(&self) -> Option<&str> {
        self.will.response_topic.as_deref()
    }

    fn correlation_data(&self) -> Option<Bytes> {
        self.will.correlation_data.clone()
    }

    fn subscription_identifiers(&self) -> &[u32] {
        &[]
    }

    fn content_type(&self) -> Option<&str> {
        self.will.content_type.as_deref()
    }

    fn payload(&self) -> Option<Bytes> {
        self.will.payload.clone()
    }

    fn user_properties(&self) -> UserProperties<'_> {
        UserProperties::new(&self.will.user_properties)
    }
}

/// A regular PUBLISH, as received from a client or routed to a subscriber
#[derive(Debug, Clone, Copy)]
pub struct PublishPacketView<'a> {
    publish: &'a Publish,
}

impl<'a> PublishPacketView<'a> {
    pub fn new(publish: &'a Publish) -> Self {
        Self { publish }
    }
}

impl PublishPacket for PublishPacketView<'_> {
    fn dup_flag(&self) -> bool {
        self.publish.dup
    }

    fn qos(&self) -> Qos {
        self.publish.qos.into()
    }

    fn retain(&self) -> bool {
        self.publish.retain
    }

    fn topic(&self) -> &str {
        &self.publish.topic
    }

    fn packet_id(&self) -> u16 {
        self.publish.pkid
    }

    fn payload_format_indicator(&self) -> Option<PayloadFormatIndicator> {
        let properties = self.publish.properties.as_ref()?;
        properties.payload_format_indicator.map(Into::into)
    }

    fn message_expiry_interval(&self) -> Option<u64> {
        let properties = self.publish.properties.as_ref()?;
        properties.message_expiry_interval.map(u64::from)
    }

    fn response_topic(&self) -> Option<&str> {
        let properties = self.publish.properties.as_ref()?;
        properties.response_topic.as_deref()
    }

    fn correlation_data(&self) -> Option<Bytes> {
        let properties = self.publish.properties.as_ref()?;
        properties.correlation_data.clone()
    }

    fn subscription_identifiers(&self) -> &[u32] {
        match &self.publish.properties {
            Some(properties) => &properties.subscription_ids,
            None => &[],
        }
    }

    fn content_type(&self) -> Option<&str> {
        let properties = self.publish.properties.as_ref()?;
        properties.content_type.as_deref()
    }

    fn payload(&self) -> Option<Bytes> {
        Some(self.publish.payload.clone())
    }

    fn user_properties(&self) -> UserProperties<'_> {
        match &self.publish.properties {
            Some(properties) => UserProperties::new(&properties.user_properties),
            None => UserProperties::new(&[]),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{PublishProperties, QoS};

    fn full_will() -> LastWill {
        LastWill::new("clients/42/status", "offline", QoS::ExactlyOnce, true)
            .with_payload_format_indicator(crate::PayloadFormatIndicator::Utf8)
            .with_will_delay_interval(30)
            .with_message_expiry_interval(120)
            .with_response_topic("clients/42/reply")
            .with_correlation_data(vec![1, 2, 3])
            .with_content_type("text/plain")
            .with_user_property("k", "1")
            .with_user_property("k", "2")
    }

    #[test]
    fn will_fields_are_projected() {
        let will = full_will();
        let view = WillPublishPacket::new(&will);

        assert_eq!(view.qos(), Qos::ExactlyOnce);
        assert!(view.retain());
        assert_eq!(view.topic(), "clients/42/status");
        assert_eq!(
            view.payload_format_indicator(),
            Some(PayloadFormatIndicator::Utf8)
        );
        assert_eq!(view.will_delay_interval(), Some(30));
        assert_eq!(view.message_expiry_interval(), Some(120));
        assert_eq!(view.response_topic(), Some("clients/42/reply"));
        assert_eq!(view.correlation_data(), Some(Bytes::from_static(&[1, 2, 3])));
        assert_eq!(view.content_type(), Some("text/plain"));
        assert_eq!(view.payload(), Some(Bytes::from_static(b"offline")));
        assert_eq!(view.user_properties().get_all_for_name("k"), vec!["1", "2"]);
    }

    #[test]
    fn unspecified_payload_format_is_kept() {
        let will = LastWill::new("a", "\x00\x01", QoS::AtMostOnce, false)
            .with_payload_format_indicator(crate::PayloadFormatIndicator::Unspecified);
        let view = WillPublishPacket::new(&will);

        assert_eq!(
            view.payload_format_indicator(),
            Some(PayloadFormatIndicator::Unspecified)
        );
    }

    #[test]
    fn will_absent_fields_are_none() {
        let will = LastWill::new("a", "", QoS::AtMostOnce, false).without_payload();
        let view = WillPublishPacket::new(&will);

        assert_eq!(view.payload_format_indicator(), None);
        assert_eq!(view.will_delay_interval(), None);
        assert_eq!(view.message_expiry_interval(), None);
        assert_eq!(view.response_topic(), None);
        assert_eq!(view.correlation_data(), None);
        assert_eq!(view.content_type(), None);
        assert_eq!(view.payload(), None);
        assert!(view.user_properties().is_empty());
    }

    #[test]
    fn will_expiry_passes_through_everything_but_the_sentinel() {
        let mut will = LastWill::new("a", "", QoS::AtMostOnce, false);

        for interval in [0, 1, u64::from(u32::MAX)] {
            will.message_expiry_interval = interval;
            assert_eq!(
                WillPublishPacket::new(&will).message_expiry_interval(),
                Some(interval)
            );
        }

        will.message_expiry_interval = MESSAGE_EXPIRY_INTERVAL_NOT_SET;
        assert_eq!(WillPublishPacket::new(&will).message_expiry_interval(), None);
    }

    #[test]
    fn will_is_never_a_redelivery() {
        let will = full_will();
        let view = WillPublishPacket::new(&will);

        assert!(!view.dup_flag());
        assert_eq!(view.packet_id(), 0);
        assert!(view.subscription_identifiers().is_empty());
    }

    #[test]
    fn will_buffers_are_shared_not_copied() {
        let will = full_will();
        let view = WillPublishPacket::new(&will);

        let payload = view.payload().unwrap();
        let stored = will.payload.as_ref().unwrap();
        assert_eq!(payload.as_ptr(), stored.as_ptr());

        let correlation = view.correlation_data().unwrap();
        let stored = will.correlation_data.as_ref().unwrap();
        assert_eq!(correlation.as_ptr(), stored.as_ptr());
    }

    #[test]
    fn every_qos_is_mapped() {
        for (qos, expected) in [
            (QoS::AtMostOnce, Qos::AtMostOnce),
            (QoS::AtLeastOnce, Qos::AtLeastOnce),
            (QoS::ExactlyOnce, Qos::ExactlyOnce),
        ] {
            let will = LastWill::new("a", "", qos, false);
            assert_eq!(WillPublishPacket::new(&will).qos(), expected);
        }
    }

    #[test]
    fn publish_view_passes_through_delivery_fields() {
        let mut publish = Publish::new("a/b", QoS::AtLeastOnce, "hello");
        publish.dup = true;
        publish.pkid = 7;
        publish.properties = Some(PublishProperties {
            message_expiry_interval: Some(30),
            subscription_ids: vec![3, 9],
            user_properties: vec![("k".into(), "v".into())],
            ..Default::default()
        });
        let view = PublishPacketView::new(&publish);

        assert!(view.dup_flag());
        assert_eq!(view.packet_id(), 7);
        assert_eq!(view.subscription_identifiers(), &[3, 9]);
        assert_eq!(view.message_expiry_interval(), Some(30));
        assert_eq!(view.payload_format_indicator(), None);
        assert_eq!(view.user_properties().get_first("k"), Some("v"));
        assert_eq!(view.payload(), Some(Bytes::from_static(b"hello")));
    }

    #[test]
    fn publish_view_without_properties() {
        let publish = Publish::new("a/b", QoS::AtMostOnce, "");
        let view = PublishPacketView::new(&publish);

        assert_eq!(view.message_expiry_interval(), None);
        assert_eq!(view.response_topic(), None);
        assert!(view.subscription_identifiers().is_empty());
        assert!(view.user_properties().is_empty());
    }

    #[test]
    fn views_are_object_safe_and_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WillPublishPacket<'static>>();
        assert_send_sync::<PublishPacketView<'static>>();

        let will = full_will();
        let publish = Publish::new("a/b", QoS::AtMostOnce, "");
        let views: Vec<Box<dyn PublishPacket + '_>> = vec![
            Box::new(WillPublishPacket::new(&will)),
            Box::new(PublishPacketView::new(&publish)),
        ];
        let topics: Vec<&str> = views.iter().map(|view| view.topic()).collect();
        assert_eq!(topics, vec!["clients/42/status", "a/b"]);
    }
}
