//! Typed Rust client for the Twilio SMS Messages REST API.
//!
//! The crate is split into a domain layer of validated types, a transport layer
//! for endpoints and wire-format quirks, and a small client layer that issues one
//! HTTP request per call and maps the answer into a record, a Twilio fault, or a
//! parse error.
//!
//! ```rust,no_run
//! use twilio_sms::{Address, Credentials, MessageBody, MessageFilter, TwilioClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), twilio_sms::TwilioError> {
//!     let client = TwilioClient::new(Credentials::from_env()?);
//!     let sent = client
//!         .send_simple(
//!             Address::sender("+15005550006")?,
//!             Address::recipient("+15551234567")?,
//!             MessageBody::new("hello")?,
//!         )
//!         .await?;
//!     let _same = client.get_message(&sent.sid).await?;
//!     let _page = client
//!         .list_messages(&MessageFilter::new().to("+15551234567"))
//!         .await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, TwilioClient, TwilioClientBuilder, TwilioError};
pub use domain::{
    AccountSid, Address, ApiFault, ApplicationSid, AuthToken, CallbackUrl, Direction, MessageBody,
    MessageFilter, MessageListPage, MessageRecord, MessageSid, MessageStatus, PhoneNumber,
    SendMessage, SendOptions, ValidationError,
};
pub use transport::{API_FORMAT, message_endpoint, message_list_endpoint};
