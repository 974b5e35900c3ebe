use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::Error;

macro_rules! send_results {
    ($( $(#[$doc:meta])* $variant:ident = $value:expr => $message:expr, )+) => {
        /// The result of a send request to the Injection API, either as reported by the
        /// API itself or as determined by the client before sending.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum SendResult {
            $( $(#[$doc])* $variant = $value, )+
        }

        impl SendResult {
            const ALL: &'static [SendResult] = &[ $( SendResult::$variant, )+ ];

            /// The symbolic name of the result. This is also its wire key.
            pub fn name(&self) -> &'static str {
                match *self {
                    $( SendResult::$variant => stringify!($variant), )+
                }
            }

            /// The default human-readable message
            pub fn message(&self) -> &'static str {
                match *self {
                    $( SendResult::$variant => $message, )+
                }
            }
        }
    }
}

send_results! {
    /// The result was not recognized
    UnknownError = 0 => "An error has occured that was unforeseen",
    Timeout = 1 => "A timeout occurred sending the message",
    Success = 2 => "Successful send of message",
    /// Sent, but some recipients may have failed. See the address results.
    Warning = 3 => "Warnings were found while sending the message",
    InternalError = 4 => "Internal server error",
    MessageTooLarge = 5 => "Message size has exceeded the size limit",
    TooManyRecipients = 6 => "Message exceeded maximum recipient count in the message",
    InvalidData = 7 => "Invalid data was found on the message",
    OverQuota = 8 => "The account is over the send quota, rate limit exceeded",
    TooManyErrors = 9 => "Too many errors occurred sending the message",
    InvalidAuthentication = 10 => "The ServerId/ApiKey combination is invalid",
    AccountDisabled = 11 => "The account has been disabled",
    TooManyMessages = 12 => "Too many messages were found in the request",
    NoValidRecipients = 13 => "No valid recipients were found in the message",
    InvalidAddress = 14 => "An invalid recipient were found on the message",
    InvalidAttachment = 15 => "An invalid attachment were found on the message",
    NoMessages = 16 => "No message body was found in the message",
    EmptyMessage = 17 => "No message body was found in the message",
    EmptySubject = 18 => "No subject was found in the message",
    InvalidFrom = 19 => "An invalid from address was found on the message",
    EmptyToAddress = 20 => "No To addresses were found in the message",
    NoValidBodyParts = 21 => "No valid message body was found in the message",
    InvalidTemplateId = 22 => "An invalid TemplateId was found in the message",
    TemplateHasNoContent = 23 => "The specified TemplateId has no content for the message",
    MessageBodyConflict = 24 => "A conflict occurred on the message body of the message",
    InvalidMergeData = 25 => "Invalid MergeData was found on the message",

    // Client-side validation results. The API never reports these.
    AuthenticationValidationFailed = 26 =>
        "SDK Validation Error: Authentication Validation Failed, Missing or invalid ServerId or ApiKey",
    EmailAddressValidationMissingFrom = 27 =>
        "SDK Validation Error: From email address is missing in the message",
    EmailAddressValidationInvalidFrom = 28 =>
        "SDK Validation Error: From email address in the message in invalid",
    RecipientValidationMaxExceeded = 29 =>
        "SDK Validation Error: Message exceeded maximum recipient count in the message",
    RecipientValidationNoneInMessage = 30 =>
        "SDK Validation Error: No recipients were found in the message",
    RecipientValidationMissingTo = 31 =>
        "SDK Validation Error: To addresses are missing in the message",
    RecipientValidationInvalidReplyTo = 32 =>
        "SDK Validation Error: Invalid ReplyTo address found",
    RecipientValidationInvalidRecipients = 33 =>
        "SDK Validation Error: Invalid recipients found",
    MessageValidationEmptySubject = 34 =>
        "SDK Validation Error: Missing subject",
    MessageValidationEmptyMessage = 35 =>
        "SDK Validation Error: Empty message",
    MessageValidationInvalidCustomHeaders = 36 =>
        "SDK Validation Error: Invalid key-value pair in custom headers",
}

impl SendResult {
    /// Look up a result by the key the API uses for it (e.g. `"Success"`).
    /// Keys are case sensitive.
    pub fn from_key(key: &str) -> Option<SendResult> {
        SendResult::ALL.iter().find(|r| r.name() == key).cloned()
    }

    /// The stable numeric code
    pub fn value(&self) -> u16 {
        *self as u16
    }

    pub fn is_success(&self) -> bool {
        *self == SendResult::Success
    }

    /// Every result, in order of value
    pub fn all() -> impl Iterator<Item = SendResult> {
        SendResult::ALL.iter().cloned()
    }
}

impl Default for SendResult {
    fn default() -> SendResult {
        SendResult::UnknownError
    }
}

impl fmt::Display for SendResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SendResult {
    type Err = Error;

    fn from_str(s: &str) -> Result<SendResult, Error> {
        SendResult::from_key(s).ok_or(Error::InvalidResultType)
    }
}

// Serialized as a descriptor, the same shape the result setter accepts.
impl Serialize for SendResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SendResult", 3)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
