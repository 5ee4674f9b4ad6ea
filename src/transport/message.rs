use serde::Deserialize;

use super::price::TransportPrice;
use crate::domain::{
    Address, ApplicationSid, CallbackUrl, Direction, MessageBody, MessageRecord, MessageSid,
    MessageStatus, SendMessage,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response field {field} must not be empty")]
    EmptyField { field: &'static str },
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct MessageJson {
    #[serde(default)]
    account_sid: Option<String>,
    #[serde(default)]
    api_version: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    date_sent: Option<String>,
    #[serde(default)]
    date_updated: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    price: Option<TransportPrice>,
    #[serde(default)]
    price_unit: Option<String>,
    sid: String,
    status: String,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    error_message: Option<String>,
}

impl MessageJson {
    pub(super) fn into_record(self) -> Result<MessageRecord, TransportError> {
        let sid = MessageSid::new(self.sid).map_err(|_| TransportError::EmptyField {
            field: MessageSid::FIELD,
        })?;
        if self.status.trim().is_empty() {
            return Err(TransportError::EmptyField { field: "status" });
        }

        Ok(MessageRecord {
            account_sid: self.account_sid.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            date_created: non_empty(self.date_created),
            date_sent: non_empty(self.date_sent),
            date_updated: non_empty(self.date_updated),
            direction: Direction::from_wire(self.direction.as_deref().unwrap_or_default()),
            from: self.from.unwrap_or_default(),
            price: self.price.and_then(TransportPrice::into_option),
            price_unit: non_empty(self.price_unit),
            sid,
            status: MessageStatus::from_wire(&self.status),
            to: self.to.unwrap_or_default(),
            uri: self.uri.unwrap_or_default(),
            error_code: self.error_code,
            error_message: non_empty(self.error_message),
        })
    }
}

pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|it| !it.trim().is_empty())
}

pub fn encode_send_message_form(request: &SendMessage) -> Vec<(String, String)> {
    let mut params = vec![
        (
            Address::SENDER_FIELD.to_owned(),
            request.from().as_str().to_owned(),
        ),
        (
            Address::RECIPIENT_FIELD.to_owned(),
            request.to().as_str().to_owned(),
        ),
        (
            MessageBody::FIELD.to_owned(),
            request.body().as_str().to_owned(),
        ),
    ];

    let options = request.options();
    if let Some(callback) = options.status_callback.as_ref() {
        params.push((CallbackUrl::FIELD.to_owned(), callback.as_str().to_owned()));
    }
    if let Some(application_sid) = options.application_sid.as_ref() {
        params.push((
            ApplicationSid::FIELD.to_owned(),
            application_sid.as_str().to_owned(),
        ));
    }

    params
}

pub fn decode_message_json_response(json: &str) -> Result<MessageRecord, TransportError> {
    let parsed: MessageJson = serde_json::from_str(json)?;
    parsed.into_record()
}
