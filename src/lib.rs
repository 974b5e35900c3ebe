//! Typed responses for the email Injection API.
//!
//! The transport hands over the HTTP status code and the decoded JSON body;
//! [`parse`] turns them into a [`SendResponse`].
//!
//! ```
//! use injection_response::{parse, SendResult};
//! use serde_json::json;
//!
//! let response = parse(200, &json!({ "ErrorCode": "Success" })).unwrap();
//! assert_eq!(response.result, SendResult::Success);
//! assert!(response.address_results.is_empty());
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod wire;
pub mod address_result;
pub mod classifier;
pub mod config;
pub mod error;
pub mod send_response;
pub mod send_result;

pub use address_result::{AddressResult, RawAddressResult};
pub use classifier::{parse, parse_json, InjectionResponse};
pub use config::Config;
pub use error::Error;
pub use send_response::{SendResponse, SendResponseBuilder};
pub use send_result::SendResult;
