use serde_json::Value;

use crate::error::Error;
use crate::send_response::{SendResponse, SendResponseBuilder};
use crate::send_result::SendResult;
use crate::wire;

/// A raw response from the Injection API, as handed over by the transport
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionResponse {
    pub status_code: u16,
    #[serde(default)]
    pub body: Value,
}

impl InjectionResponse {
    pub fn new(status_code: u16, body: Value) -> InjectionResponse {
        InjectionResponse { status_code, body }
    }

    pub fn parse(&self) -> Result<SendResponse, Error> {
        parse(self.status_code, &self.body)
    }
}

/// Parse a response whose body is still JSON text. Blank text is an empty body.
pub fn parse_json(status_code: u16, body: &str) -> Result<SendResponse, Error> {
    let body = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body)?
    };
    parse(status_code, &body)
}

/// Classify a response from the Injection API.
///
/// The HTTP status decides the result, except for a 200 where the body's
/// `ErrorCode` does. A `Warning` is then narrowed to the error code of the first
/// message result, if that code is known. Only the first message result is ever
/// looked at.
pub fn parse(status_code: u16, body: &Value) -> Result<SendResponse, Error> {
    let mut response = SendResponseBuilder::new();

    response.set_transaction_receipt_value(wire::field(body, "TransactionReceipt"))?;

    let result = match status_code {
        200 => lookup(wire::field(body, "ErrorCode")).unwrap_or(SendResult::UnknownError),
        500 => SendResult::InternalError,
        408 => SendResult::Timeout,
        401 => SendResult::InvalidAuthentication,
        _ => SendResult::UnknownError,
    };
    debug!("(parse) status {} classified as {}", status_code, result);
    response.set_result(result);

    let first_message = wire::first_element(wire::field(body, "MessageResults"));

    if let Some(message) = first_message {
        if result == SendResult::Warning {
            if let Some(r) = lookup(wire::field(message, "ErrorCode")) {
                debug!("(parse) warning narrowed to {}", r);
                response.set_result(r);
            }
        }

        response.set_address_results_value(wire::field(message, "AddressResults"))?;
    }

    response.build()
}

fn lookup(error_code: &Value) -> Option<SendResult> {
    if wire::is_falsy(error_code) {
        return None;
    }
    let found = error_code.as_str().and_then(SendResult::from_key);
    if found.is_none() {
        warn!("(parse) unrecognized error code {}", error_code);
    }
    found
}
