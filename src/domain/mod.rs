//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{MessageFilter, SendMessage, SendOptions};
pub use response::{ApiFault, Direction, MessageListPage, MessageRecord, MessageStatus};
pub use validation::ValidationError;
pub use value::{
    AccountSid, Address, ApplicationSid, AuthToken, CallbackUrl, MessageBody, MessageSid,
    PhoneNumber,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_sid_rejects_empty() {
        assert!(matches!(
            MessageSid::new("   "),
            Err(ValidationError::Empty {
                field: MessageSid::FIELD
            })
        ));
    }

    #[test]
    fn send_options_from_raw_treats_empty_as_unset() {
        let options = SendOptions::from_raw("", "").unwrap();
        assert_eq!(options, SendOptions::default());

        let options = SendOptions::from_raw("https://example.com/cb", "").unwrap();
        assert_eq!(
            options.status_callback.as_ref().map(CallbackUrl::as_str),
            Some("https://example.com/cb")
        );
        assert!(options.application_sid.is_none());

        let options = SendOptions::from_raw("", "AP123").unwrap();
        assert!(options.status_callback.is_none());
        assert_eq!(
            options.application_sid.as_ref().map(ApplicationSid::as_str),
            Some("AP123")
        );
    }

    #[test]
    fn send_options_from_raw_keeps_non_empty_values_verbatim() {
        let options = SendOptions::from_raw(" ", " AP1 ").unwrap();
        assert_eq!(
            options.status_callback.as_ref().map(CallbackUrl::as_str),
            Some(" ")
        );
        assert_eq!(
            options.application_sid.as_ref().map(ApplicationSid::as_str),
            Some(" AP1 ")
        );

        let options = SendOptions::from_raw("callback-token", "").unwrap();
        assert_eq!(
            options.status_callback.as_ref().map(CallbackUrl::as_str),
            Some("callback-token")
        );
    }

    #[test]
    fn simple_send_uses_default_options() {
        let request = SendMessage::simple(
            Address::sender("+15005550006").unwrap(),
            Address::recipient("+15551234567").unwrap(),
            MessageBody::new("hello").unwrap(),
        );
        assert_eq!(request.options(), &SendOptions::default());
        assert_eq!(request.from().as_str(), "+15005550006");
        assert_eq!(request.to().as_str(), "+15551234567");
        assert_eq!(request.body().as_str(), "hello");
    }

    #[test]
    fn message_filter_keeps_unknown_keys_and_last_value_wins() {
        let filter = MessageFilter::new()
            .to("+15551234567")
            .to("+15550000000")
            .date_sent("2024-01-31")
            .insert("Whatever", "x");

        assert_eq!(filter.get(MessageFilter::TO), Some("+15550000000"));
        assert_eq!(filter.get("DateSent"), Some("2024-01-31"));
        assert_eq!(filter.get("Whatever"), Some("x"));
        assert_eq!(filter.iter().count(), 3);
        assert!(MessageFilter::new().is_empty());
    }

    #[test]
    fn message_filter_collects_from_pairs() {
        let filter: MessageFilter = [("From", "+15005550006"), ("PageSize", "50")]
            .into_iter()
            .collect();
        assert_eq!(
            filter,
            MessageFilter::new().from("+15005550006").page_size(50)
        );
    }

    #[test]
    fn message_status_round_trips_wire_names() {
        for raw in ["queued", "sent", "delivered", "undelivered", "failed"] {
            assert_eq!(MessageStatus::from_wire(raw).as_str(), raw);
        }
        assert_eq!(
            MessageStatus::from_wire("partially_delivered"),
            MessageStatus::Other("partially_delivered".to_owned())
        );
        assert!(MessageStatus::Delivered.is_final());
        assert!(!MessageStatus::Sent.is_final());
        assert!(!MessageStatus::Queued.is_final());
    }

    #[test]
    fn direction_maps_known_values() {
        assert_eq!(Direction::from_wire("outbound-api"), Direction::OutboundApi);
        assert_eq!(Direction::from_wire("inbound"), Direction::Inbound);
        assert_eq!(Direction::from_wire("sideways").as_str(), "sideways");
    }

    #[test]
    fn api_fault_display_includes_code_when_present() {
        let fault = ApiFault {
            status: 404,
            message: "The requested resource was not found".to_owned(),
            code: Some(20404),
            more_info: None,
        };
        assert_eq!(
            fault.to_string(),
            "The requested resource was not found (code 20404, status 404)"
        );

        let fault = ApiFault {
            code: None,
            ..fault
        };
        assert_eq!(
            fault.to_string(),
            "The requested resource was not found (status 404)"
        );
    }
}
