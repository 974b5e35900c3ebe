use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A value handed to the result setter was not a result descriptor
    InvalidResultType,
    /// A value handed to a string setter was not a string. Names the field.
    InvalidStringType(&'static str),
    /// A response was finished without ever being given a result
    MissingResult,
    Json(serde_json::Error),
    Config(toml::de::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidResultType =>
                write!(f, "Invalid sendResult, type of 'SendResult' was expected."),
            Error::InvalidStringType(field) =>
                write!(f, "Invalid {}, type of 'string' was expected.", field),
            Error::MissingResult =>
                write!(f, "Response has no result"),
            Error::Json(ref e) => write!(f, "JSON error: {}", e),
            Error::Config(ref e) => write!(f, "Config error: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::Json(ref e) => Some(e),
            Error::Config(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error
    {
        Error::Json(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Error
    {
        Error::Config(e)
    }
}
