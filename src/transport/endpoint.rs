//! Endpoint construction. Pure string composition, no I/O.

use crate::domain::{AccountSid, MessageSid};

/// Response format suffix appended to every SMS endpoint.
pub const API_FORMAT: &str = "json";

fn messages_base(base_url: &str, account_sid: &AccountSid) -> String {
    format!(
        "{}/Accounts/{}/SMS/Messages",
        base_url.trim_end_matches('/'),
        account_sid.as_str()
    )
}

/// Endpoint used to send and to list messages.
pub fn message_list_endpoint(base_url: &str, account_sid: &AccountSid, format: &str) -> String {
    format!("{}.{format}", messages_base(base_url, account_sid))
}

/// Endpoint of a single message.
pub fn message_endpoint(
    base_url: &str,
    account_sid: &AccountSid,
    sid: &MessageSid,
    format: &str,
) -> String {
    format!(
        "{}/{}.{format}",
        messages_base(base_url, account_sid),
        sid.as_str()
    )
}

/// Resolve a page URI returned by Twilio (an absolute path such as
/// `/2010-04-01/Accounts/AC../SMS/Messages.json?Page=1`) against the base URL's origin.
pub fn resolve_page_uri(base_url: &str, uri: &str) -> Result<String, url::ParseError> {
    let base = url::Url::parse(base_url)?;
    Ok(base.join(uri)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> AccountSid {
        AccountSid::new("AC123").unwrap()
    }

    #[test]
    fn list_endpoint_appends_format() {
        assert_eq!(
            message_list_endpoint("https://api.twilio.com/2010-04-01", &account(), API_FORMAT),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/SMS/Messages.json"
        );
    }

    #[test]
    fn message_endpoint_appends_sid_and_format() {
        let sid = MessageSid::new("SM42").unwrap();
        assert_eq!(
            message_endpoint("https://api.twilio.com/2010-04-01/", &account(), &sid, "xml"),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/SMS/Messages/SM42.xml"
        );
    }

    #[test]
    fn endpoints_are_deterministic() {
        let sid = MessageSid::new("SM42").unwrap();
        let first = message_endpoint("https://h/v", &account(), &sid, API_FORMAT);
        let second = message_endpoint("https://h/v", &account(), &sid, API_FORMAT);
        assert_eq!(first, second);
    }

    #[test]
    fn page_uri_resolves_against_origin() {
        let resolved = resolve_page_uri(
            "https://api.twilio.com/2010-04-01",
            "/2010-04-01/Accounts/AC123/SMS/Messages.json?Page=1&PageSize=50",
        )
        .unwrap();
        assert_eq!(
            resolved,
            "https://api.twilio.com/2010-04-01/Accounts/AC123/SMS/Messages.json?Page=1&PageSize=50"
        );

        let absolute = resolve_page_uri("https://api.twilio.com", "https://other.test/x").unwrap();
        assert_eq!(absolute, "https://other.test/x");

        assert!(resolve_page_uri("not a url", "/x").is_err());
    }
}
