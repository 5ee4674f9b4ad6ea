use serde::Deserialize;
use serde::de::Error as DeError;

/// Price returned by Twilio as a JSON string (`"-0.00750"`) or a JSON number.
///
/// An empty string means the price is not known yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportPrice(Option<f64>);

impl TransportPrice {
    pub fn into_option(self) -> Option<f64> {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                let trimmed = parsed.trim();
                if trimmed.is_empty() {
                    return Ok(Self(None));
                }
                trimmed
                    .parse::<f64>()
                    .map(|value| Self(Some(value)))
                    .map_err(|_| D::Error::custom(format!("price is not a number: {trimmed}")))
            }
            Some(b'-' | b'0'..=b'9') => token
                .parse::<f64>()
                .map(|value| Self(Some(value)))
                .map_err(D::Error::custom),
            _ => Err(D::Error::custom(
                "expected price field to be JSON string or number",
            )),
        }
    }
}
