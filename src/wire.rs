//! Helpers for reading loosely-typed values out of Injection API bodies.
//!
//! The API (and its reference clients) treat `null`, a missing field, `false`,
//! `0` and `""` alike, as "not supplied".

use serde_json::Value;

use crate::error::Error;

static NULL: Value = Value::Null;

pub fn is_falsy(value: &Value) -> bool {
    match *value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(ref n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(ref s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// A field of a body record. Anything that is not an object has no fields.
pub fn field<'a>(value: &'a Value, name: &str) -> &'a Value {
    value.as_object()
        .and_then(|o| o.get(name))
        .unwrap_or(&NULL)
}

/// A string-typed field value. `None` if not supplied.
pub fn optional_string(value: &Value, field_name: &'static str) -> Result<Option<String>, Error> {
    if is_falsy(value) {
        return Ok(None);
    }
    match *value {
        Value::String(ref s) => Ok(Some(s.clone())),
        _ => Err(Error::InvalidStringType(field_name)),
    }
}

/// The first element of a field holding a non-empty array
pub fn first_element(value: &Value) -> Option<&Value> {
    value.as_array().and_then(|a| a.first())
}
