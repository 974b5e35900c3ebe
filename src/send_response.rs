use std::fmt;

use serde_json::Value;

use crate::address_result::AddressResult;
use crate::error::Error;
use crate::send_result::SendResult;
use crate::wire;

/// The typed outcome of a send request to the Injection API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    /// The result of the send request as a whole
    pub result: SendResult,

    /// A key generated by the Injection API when an unexpected error occurs.
    /// Support can use it to troubleshoot the request.
    pub transaction_receipt: Option<String>,

    /// The status of each address that failed. Empty if none failed.
    pub address_results: Vec<AddressResult>,

    /// Why the request failed (or that it succeeded)
    pub response_message: String,
}

impl SendResponse {
    pub fn builder() -> SendResponseBuilder {
        SendResponseBuilder::new()
    }

    pub fn succeeded(&self) -> bool {
        self.result.is_success()
    }

    /// Addresses the API did not accept
    pub fn failed_addresses(&self) -> impl Iterator<Item = &AddressResult> {
        self.address_results.iter().filter(|a| !a.accepted)
    }
}

impl fmt::Display for SendResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.result, self.response_message)
    }
}

/// Assembles a `SendResponse` one field at a time.
///
/// Setters given nothing (an empty string, or a falsy JSON value) leave the field
/// as it was.
#[derive(Debug, Clone, Default)]
pub struct SendResponseBuilder {
    result: Option<SendResult>,
    transaction_receipt: Option<String>,
    address_results: Option<Vec<AddressResult>>,
    response_message: Option<String>,
}

impl SendResponseBuilder {
    pub fn new() -> SendResponseBuilder {
        Default::default()
    }

    /// Set the result. This also resets the response message to the result's
    /// default message.
    pub fn set_result(&mut self, result: SendResult) -> &mut SendResponseBuilder {
        self.result = Some(result);
        self.response_message = Some(result.message().to_owned());
        self
    }

    /// Set the result from a `{name, value, message}` descriptor
    pub fn set_result_value(&mut self, value: &Value) -> Result<&mut SendResponseBuilder, Error> {
        if wire::is_falsy(value) {
            return Ok(self);
        }
        let result = descriptor(value).ok_or(Error::InvalidResultType)?;
        Ok(self.set_result(result))
    }

    pub fn set_transaction_receipt(&mut self, receipt: &str) -> &mut SendResponseBuilder {
        if !receipt.is_empty() {
            self.transaction_receipt = Some(receipt.to_owned());
        }
        self
    }

    pub fn set_transaction_receipt_value(&mut self, value: &Value)
                                         -> Result<&mut SendResponseBuilder, Error>
    {
        if let Some(receipt) = wire::optional_string(value, "transactionReceipt")? {
            self.transaction_receipt = Some(receipt);
        }
        Ok(self)
    }

    pub fn set_response_message(&mut self, message: &str) -> &mut SendResponseBuilder {
        if !message.is_empty() {
            self.response_message = Some(message.to_owned());
        }
        self
    }

    pub fn set_response_message_value(&mut self, value: &Value)
                                      -> Result<&mut SendResponseBuilder, Error>
    {
        if let Some(message) = wire::optional_string(value, "responseMessage")? {
            self.response_message = Some(message);
        }
        Ok(self)
    }

    /// Append address results
    pub fn set_address_results<I>(&mut self, results: I) -> &mut SendResponseBuilder
        where I: IntoIterator<Item = AddressResult>
    {
        self.address_results.get_or_insert_with(Vec::new).extend(results);
        self
    }

    /// Convert and append raw address records: either a single record or an
    /// array of them.
    pub fn set_address_results_value(&mut self, value: &Value)
                                     -> Result<&mut SendResponseBuilder, Error>
    {
        if wire::is_falsy(value) {
            return Ok(self);
        }
        let converted = match *value {
            Value::Array(ref records) => records.iter()
                .map(AddressResult::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            _ => vec![AddressResult::from_value(value)?],
        };
        Ok(self.set_address_results(converted))
    }

    pub fn result(&self) -> Option<SendResult> {
        self.result
    }

    /// `None` until address results are first set
    pub fn address_results(&self) -> Option<&[AddressResult]> {
        self.address_results.as_ref().map(|v| &**v)
    }

    pub fn build(&self) -> Result<SendResponse, Error> {
        let result = self.result.ok_or(Error::MissingResult)?;
        Ok(SendResponse {
            result,
            transaction_receipt: self.transaction_receipt.clone(),
            address_results: self.address_results.clone().unwrap_or_default(),
            response_message: self.response_message.clone()
                .unwrap_or_else(|| result.message().to_owned()),
        })
    }
}

// A descriptor must carry all three keys, and name a result we know.
fn descriptor(value: &Value) -> Option<SendResult> {
    let object = value.as_object()?;
    if !(object.contains_key("name") && object.contains_key("value")
         && object.contains_key("message"))
    {
        return None;
    }
    object.get("name")
        .and_then(Value::as_str)
        .and_then(SendResult::from_key)
}
