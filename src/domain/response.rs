use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::value::MessageSid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Inbound,
    OutboundApi,
    OutboundCall,
    OutboundReply,
    /// A direction this crate does not know yet, kept verbatim.
    Other(String),
}

impl Direction {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "inbound" => Self::Inbound,
            "outbound-api" => Self::OutboundApi,
            "outbound-call" => Self::OutboundCall,
            "outbound-reply" => Self::OutboundReply,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Inbound => "inbound",
            Self::OutboundApi => "outbound-api",
            Self::OutboundCall => "outbound-call",
            Self::OutboundReply => "outbound-reply",
            Self::Other(other) => other,
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageStatus {
    Queued,
    Sending,
    Sent,
    Failed,
    Received,
    Delivered,
    Undelivered,
    Accepted,
    Scheduled,
    Canceled,
    /// A status this crate does not know yet, kept verbatim.
    Other(String),
}

impl MessageStatus {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "queued" => Self::Queued,
            "sending" => Self::Sending,
            "sent" => Self::Sent,
            "failed" => Self::Failed,
            "received" => Self::Received,
            "delivered" => Self::Delivered,
            "undelivered" => Self::Undelivered,
            "accepted" => Self::Accepted,
            "scheduled" => Self::Scheduled,
            "canceled" => Self::Canceled,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Failed => "failed",
            Self::Received => "received",
            Self::Delivered => "delivered",
            Self::Undelivered => "undelivered",
            Self::Accepted => "accepted",
            Self::Scheduled => "scheduled",
            Self::Canceled => "canceled",
            Self::Other(other) => other,
        }
    }

    /// Whether Twilio will not move the message to another status anymore.
    ///
    /// `Sent` is not final: carriers may still report delivery.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Failed | Self::Received | Self::Delivered | Self::Undelivered | Self::Canceled
        )
    }
}

impl Serialize for MessageStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for MessageSid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single SMS message as reported by Twilio.
///
/// Serializes back into Twilio's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    pub account_sid: String,
    pub api_version: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<String>,
    pub direction: Direction,
    pub from: String,
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<String>,
    pub sid: MessageSid,
    pub status: MessageStatus,
    pub to: String,
    pub uri: String,
    /// Twilio error code for failed or undelivered messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageListPage {
    pub start: u64,
    pub end: u64,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub num_pages: u64,
    pub uri: String,
    pub first_page_uri: Option<String>,
    pub last_page_uri: Option<String>,
    pub next_page_uri: Option<String>,
    pub previous_page_uri: Option<String>,
    #[serde(rename = "sms_messages")]
    pub messages: Vec<MessageRecord>,
}

/// Error body returned by Twilio for a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFault {
    /// HTTP status Twilio reports inside the body.
    pub status: u16,
    pub message: String,
    /// Twilio error code, see `more_info` for its documentation page.
    pub code: Option<i64>,
    pub more_info: Option<String>,
}

impl fmt::Display for ApiFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {code}, status {})", self.message, self.status),
            None => write!(f, "{} (status {})", self.message, self.status),
        }
    }
}

impl std::error::Error for ApiFault {}
