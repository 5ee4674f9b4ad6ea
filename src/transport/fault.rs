use serde::Deserialize;

use super::message::{TransportError, non_empty};
use crate::domain::ApiFault;

#[derive(Debug, Clone, Deserialize)]
struct ApiFaultJson {
    #[serde(default)]
    status: Option<u16>,
    message: String,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    more_info: Option<String>,
}

/// Decode a Twilio error body. `http_status` fills in a missing `status` field.
pub fn decode_api_fault_json_response(
    json: &str,
    http_status: u16,
) -> Result<ApiFault, TransportError> {
    let parsed: ApiFaultJson = serde_json::from_str(json)?;
    Ok(ApiFault {
        status: parsed.status.unwrap_or(http_status),
        message: parsed.message,
        code: parsed.code,
        more_info: non_empty(parsed.more_info),
    })
}
