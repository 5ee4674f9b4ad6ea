use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Twilio account identifier (`AC...`).
///
/// Invariant: non-empty after trimming.
pub struct AccountSid(String);

impl AccountSid {
    /// Name used for this value in Twilio responses (`account_sid`).
    pub const FIELD: &'static str = "account_sid";

    /// Create a validated [`AccountSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account sid.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Twilio auth token, used as the basic-auth password.
///
/// Invariant: must not be empty. `Debug` never prints the secret.
pub struct AuthToken(String);

impl AuthToken {
    pub const FIELD: &'static str = "auth_token";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message identifier (`SM...`) assigned by Twilio when a message is created.
///
/// Invariant: non-empty after trimming. The format itself is provider-defined.
pub struct MessageSid(String);

impl MessageSid {
    pub const FIELD: &'static str = "sid";

    /// Create a validated [`MessageSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message sid.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Twilio application identifier (`AP...`) used for status callback routing.
///
/// Invariant: not the empty string. The value is sent exactly as given.
pub struct ApplicationSid(String);

impl ApplicationSid {
    /// Form field name used by Twilio (`ApplicationSid`).
    pub const FIELD: &'static str = "ApplicationSid";

    /// Create an [`ApplicationSid`]; only `""` is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the application sid as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Sender or recipient address as sent to Twilio.
///
/// Twilio accepts E.164 numbers, short codes and alphanumeric sender ids, so no
/// format check is done here. Use [`PhoneNumber`] when normalization is wanted.
///
/// Invariant: not blank. The value is sent exactly as given, whitespace included.
pub struct Address(String);

impl Address {
    /// Form field name for the sender (`From`).
    pub const SENDER_FIELD: &'static str = "From";
    /// Form field name for the recipient (`To`).
    pub const RECIPIENT_FIELD: &'static str = "To";

    /// Create a validated [`Address`]. `field` names the parameter in errors.
    fn with_field(value: impl Into<String>, field: &'static str) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field });
        }
        Ok(Self(value))
    }

    /// Create a validated sender address (`From`).
    pub fn sender(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_field(value, Self::SENDER_FIELD)
    }

    /// Create a validated recipient address (`To`).
    pub fn recipient(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_field(value, Self::RECIPIENT_FIELD)
    }

    /// Borrow the address as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Address {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`Body`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace)
/// is preserved. Length limits are enforced by Twilio, not here.
pub struct MessageBody(String);

impl MessageBody {
    /// Form field name used by Twilio (`Body`).
    pub const FIELD: &'static str = "Body";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// URL Twilio POSTs to whenever the message status changes (`StatusCallback`).
///
/// Invariant: not the empty string. [`CallbackUrl::new`] sends the value exactly as
/// given; [`CallbackUrl::parse_http`] additionally requires an absolute http(s) URL.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Form field name used by Twilio (`StatusCallback`).
    pub const FIELD: &'static str = "StatusCallback";

    /// Create a [`CallbackUrl`] without checking its format; only `""` is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Create a [`CallbackUrl`] that must parse as an absolute `http`/`https` URL.
    ///
    /// The value is still stored and sent exactly as given.
    pub fn parse_http(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = url::Url::parse(&value).map_err(|_| ValidationError::InvalidCallbackUrl {
            input: value.clone(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidCallbackUrl { input: value });
        }

        Ok(Self(value))
    }

    /// Borrow the URL as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality is based on the E.164 form. Convert into [`Address`] to send.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Address::RECIPIENT_FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}
