use serde::Deserialize;

use super::message::{MessageJson, TransportError, non_empty};
use crate::domain::{MessageFilter, MessageListPage, MessageRecord};

#[derive(Debug, Clone, Deserialize)]
struct MessageListJson {
    #[serde(default)]
    start: u64,
    #[serde(default)]
    end: u64,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    page: u64,
    #[serde(default)]
    page_size: u64,
    #[serde(default)]
    num_pages: u64,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    first_page_uri: Option<String>,
    #[serde(default)]
    last_page_uri: Option<String>,
    #[serde(default)]
    next_page_uri: Option<String>,
    #[serde(default)]
    previous_page_uri: Option<String>,
    #[serde(default, alias = "messages")]
    sms_messages: Vec<MessageJson>,
}

pub fn encode_message_filter_query(filter: &MessageFilter) -> Vec<(String, String)> {
    filter
        .iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

pub fn decode_message_list_json_response(json: &str) -> Result<MessageListPage, TransportError> {
    let parsed: MessageListJson = serde_json::from_str(json)?;

    let messages = parsed
        .sms_messages
        .into_iter()
        .map(MessageJson::into_record)
        .collect::<Result<Vec<MessageRecord>, TransportError>>()?;

    Ok(MessageListPage {
        start: parsed.start,
        end: parsed.end,
        total: parsed.total,
        page: parsed.page,
        page_size: parsed.page_size,
        num_pages: parsed.num_pages,
        uri: parsed.uri.unwrap_or_default(),
        first_page_uri: non_empty(parsed.first_page_uri),
        last_page_uri: non_empty(parsed.last_page_uri),
        next_page_uri: non_empty(parsed.next_page_uri),
        previous_page_uri: non_empty(parsed.previous_page_uri),
        messages,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::MessageStatus;

    use super::*;

    const PAGE: &str = r#"
    {
      "start": 0,
      "total": 3,
      "num_pages": 2,
      "page": 0,
      "page_size": 2,
      "end": 1,
      "uri": "/2010-04-01/Accounts/AC123/SMS/Messages.json?PageSize=2",
      "first_page_uri": "/2010-04-01/Accounts/AC123/SMS/Messages.json?Page=0&PageSize=2",
      "last_page_uri": "/2010-04-01/Accounts/AC123/SMS/Messages.json?Page=1&PageSize=2",
      "next_page_uri": "/2010-04-01/Accounts/AC123/SMS/Messages.json?Page=1&PageSize=2",
      "previous_page_uri": "",
      "sms_messages": [
        {
          "account_sid": "AC123",
          "api_version": "2010-04-01",
          "body": "second",
          "date_created": "Mon, 16 Aug 2010 03:45:01 +0000",
          "date_sent": "Mon, 16 Aug 2010 03:45:03 +0000",
          "date_updated": "Mon, 16 Aug 2010 03:45:03 +0000",
          "direction": "outbound-api",
          "from": "+15005550006",
          "price": "-0.02000",
          "price_unit": "USD",
          "sid": "SM800f449d0399ed014aae2bcc0cc2f2ec",
          "status": "sent",
          "to": "+15551234567",
          "uri": "/2010-04-01/Accounts/AC123/SMS/Messages/SM800f449d0399ed014aae2bcc0cc2f2ec.json"
        },
        {
          "account_sid": "AC123",
          "api_version": "2010-04-01",
          "body": "first",
          "date_created": "Mon, 16 Aug 2010 03:40:01 +0000",
          "date_sent": "Mon, 16 Aug 2010 03:40:03 +0000",
          "date_updated": "Mon, 16 Aug 2010 03:40:03 +0000",
          "direction": "inbound",
          "from": "+15551234567",
          "price": -0.01,
          "sid": "SM1f0e8ae6ade43cb3c0ce4525424e404f",
          "status": "received",
          "to": "+15005550006",
          "uri": "/2010-04-01/Accounts/AC123/SMS/Messages/SM1f0e8ae6ade43cb3c0ce4525424e404f.json"
        }
      ]
    }
    "#;

    #[test]
    fn encode_empty_filter_has_no_params() {
        assert!(encode_message_filter_query(&MessageFilter::new()).is_empty());
    }

    #[test]
    fn encode_filter_passes_pairs_through() {
        let filter = MessageFilter::new()
            .to("+15551234567")
            .insert("Unknown", "kept");
        assert_eq!(
            encode_message_filter_query(&filter),
            vec![
                ("To".to_owned(), "+15551234567".to_owned()),
                ("Unknown".to_owned(), "kept".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_page_keeps_provider_order_and_metadata() {
        let page = decode_message_list_json_response(PAGE).unwrap();
        assert_eq!(page.start, 0);
        assert_eq!(page.end, 1);
        assert_eq!(page.total, 3);
        assert_eq!(page.num_pages, 2);
        assert_eq!(page.page_size, 2);
        assert_eq!(
            page.next_page_uri.as_deref(),
            Some("/2010-04-01/Accounts/AC123/SMS/Messages.json?Page=1&PageSize=2")
        );
        assert_eq!(page.previous_page_uri, None);

        let bodies = page
            .messages
            .iter()
            .map(|it| it.body.as_str())
            .collect::<Vec<_>>();
        assert_eq!(bodies, vec!["second", "first"]);
        assert_eq!(page.messages[0].price, Some(-0.02));
        assert_eq!(page.messages[1].status, MessageStatus::Received);
    }

    #[test]
    fn serialized_messages_parse_back_identically() {
        let page = decode_message_list_json_response(PAGE).unwrap();

        let reencoded = serde_json::to_string(&page.messages).unwrap();
        let wrapped = format!(r#"{{"sms_messages": {reencoded}}}"#);
        let reparsed = decode_message_list_json_response(&wrapped).unwrap();

        assert_eq!(reparsed.messages.len(), page.messages.len());
        assert_eq!(reparsed.messages, page.messages);
    }

    #[test]
    fn decode_accepts_messages_alias_and_missing_totals() {
        let json = r#"{"uri": "/x", "messages": [], "next_page_uri": null}"#;
        let page = decode_message_list_json_response(json).unwrap();
        assert!(page.messages.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.next_page_uri, None);
    }

    #[test]
    fn decode_page_without_list_key_is_empty() {
        let page = decode_message_list_json_response(r#"{"start": 0}"#).unwrap();
        assert!(page.messages.is_empty());
        assert_eq!(page.start, 0);
    }

    #[test]
    fn decode_page_items_need_only_sid_and_status() {
        let json = r#"{"sms_messages": [{"sid": "SM1", "status": "queued", "body": "hi", "to": "+1555"}]}"#;
        let page = decode_message_list_json_response(json).unwrap();
        assert_eq!(page.messages.len(), 1);
        assert_eq!(page.messages[0].sid.as_str(), "SM1");
        assert_eq!(page.messages[0].account_sid, "");

        let missing_status = r#"{"sms_messages": [{"sid": "SM1"}]}"#;
        assert!(matches!(
            decode_message_list_json_response(missing_status),
            Err(TransportError::Json(_))
        ));
    }
}
