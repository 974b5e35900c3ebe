use std::fmt;

use serde_json::Value;

use crate::error::Error;
use crate::send_result::SendResult;

/// Per-address outcome, as the Injection API reports it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawAddressResult {
    #[serde(rename = "EmailAddress")]
    pub email_address: Option<String>,

    #[serde(rename = "Accepted")]
    pub accepted: Option<bool>,

    #[serde(rename = "ErrorCode")]
    pub error_code: Option<String>,
}

impl RawAddressResult {
    /// Decode one raw record from the response body
    pub fn from_value(value: &Value) -> Result<RawAddressResult, Error> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

/// The outcome of a send for one recipient address
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResult {
    /// The recipient's email address
    pub email_address: String,

    /// Whether the API accepted the address
    pub accepted: bool,

    /// The error code reported for this address, verbatim
    pub error_code: Option<String>,

    /// The error code resolved against the result table
    pub result: SendResult,
}

impl AddressResult {
    /// Convert a raw record. This never fails: an error code that is absent or not
    /// in the table resolves to `Success` for an accepted address and to
    /// `UnknownError` otherwise.
    pub fn convert(raw: &RawAddressResult) -> AddressResult {
        let accepted = raw.accepted.unwrap_or(false);
        let error_code = raw.error_code.clone().filter(|c| !c.is_empty());

        let result = match error_code.as_ref().and_then(|c| SendResult::from_key(c)) {
            Some(r) => r,
            None if accepted => SendResult::Success,
            None => SendResult::UnknownError,
        };

        AddressResult {
            email_address: raw.email_address.clone().unwrap_or_default(),
            accepted,
            error_code,
            result,
        }
    }

    /// Decode and convert one raw record from the response body
    pub fn from_value(value: &Value) -> Result<AddressResult, Error> {
        let raw = RawAddressResult::from_value(value)?;
        Ok(AddressResult::convert(&raw))
    }

    /// The diagnostic message for this address
    pub fn message(&self) -> &'static str {
        self.result.message()
    }
}

impl fmt::Display for AddressResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.email_address,
               self.error_code.as_ref().map(|s| &**s).unwrap_or(""))
    }
}
