use std::collections::BTreeMap;

use crate::domain::validation::ValidationError;
use crate::domain::value::{Address, ApplicationSid, CallbackUrl, MessageBody};

/// Optional send parameters. `None` leaves the field out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// URL Twilio calls with delivery status updates (`StatusCallback`).
    pub status_callback: Option<CallbackUrl>,
    /// Application whose callback configuration applies (`ApplicationSid`).
    pub application_sid: Option<ApplicationSid>,
}

impl SendOptions {
    /// Build options from plain strings, treating `""` as "not set".
    ///
    /// Any other value, whitespace included, is kept and sent exactly as given.
    pub fn from_raw(
        status_callback: &str,
        application_sid: &str,
    ) -> Result<Self, ValidationError> {
        let status_callback = if status_callback.is_empty() {
            None
        } else {
            Some(CallbackUrl::new(status_callback)?)
        };
        let application_sid = if application_sid.is_empty() {
            None
        } else {
            Some(ApplicationSid::new(application_sid)?)
        };
        Ok(Self {
            status_callback,
            application_sid,
        })
    }
}

/// A message to send: sender, recipient, text, and [`SendOptions`].
#[derive(Debug, Clone)]
pub struct SendMessage {
    from: Address,
    to: Address,
    body: MessageBody,
    options: SendOptions,
}

impl SendMessage {
    /// Assemble a send request from already validated parts.
    pub fn new(from: Address, to: Address, body: MessageBody, options: SendOptions) -> Self {
        Self {
            from,
            to,
            body,
            options,
        }
    }

    /// Send without a status callback or application routing.
    pub fn simple(from: Address, to: Address, body: MessageBody) -> Self {
        Self::new(from, to, body, SendOptions::default())
    }

    /// Sender address (`From`).
    pub fn from(&self) -> &Address {
        &self.from
    }

    /// Recipient address (`To`).
    pub fn to(&self) -> &Address {
        &self.to
    }

    /// Message text (`Body`).
    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Optional parameters; unset ones are omitted from the form.
    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// Filters for listing messages, passed to Twilio as query parameters.
///
/// Keys are not validated locally; anything set via [`MessageFilter::insert`] is
/// sent verbatim and Twilio decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    params: BTreeMap<String, String>,
}

impl MessageFilter {
    pub const TO: &'static str = "To";
    pub const FROM: &'static str = "From";
    pub const DATE_SENT: &'static str = "DateSent";
    pub const DATE_SENT_BEFORE: &'static str = "DateSent<";
    pub const DATE_SENT_AFTER: &'static str = "DateSent>";
    pub const PAGE: &'static str = "Page";
    pub const PAGE_SIZE: &'static str = "PageSize";

    pub fn new() -> Self {
        Self::default()
    }

    /// Only messages sent to this address.
    pub fn to(self, to: impl Into<String>) -> Self {
        self.insert(Self::TO, to)
    }

    /// Only messages sent from this address.
    pub fn from(self, from: impl Into<String>) -> Self {
        self.insert(Self::FROM, from)
    }

    /// Only messages sent on this GMT date (`YYYY-MM-DD`).
    pub fn date_sent(self, date: impl Into<String>) -> Self {
        self.insert(Self::DATE_SENT, date)
    }

    /// Only messages sent on or before this GMT date (`YYYY-MM-DD`).
    pub fn date_sent_before(self, date: impl Into<String>) -> Self {
        self.insert(Self::DATE_SENT_BEFORE, date)
    }

    /// Only messages sent on or after this GMT date (`YYYY-MM-DD`).
    pub fn date_sent_after(self, date: impl Into<String>) -> Self {
        self.insert(Self::DATE_SENT_AFTER, date)
    }

    /// Zero-based page index.
    pub fn page(self, page: u32) -> Self {
        self.insert(Self::PAGE, page.to_string())
    }

    pub fn page_size(self, page_size: u32) -> Self {
        self.insert(Self::PAGE_SIZE, page_size.to_string())
    }

    /// Set an arbitrary filter. A later value for the same key replaces the earlier one.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for MessageFilter
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
