//! Record module - raw retrieved posts and typed access to their fields

use serde_json::{Map, Value};
use thiserror::Error;

/// A retrieved post exactly as the retrieval source produced it.
///
/// Only `id` is expected to be present; `title`, `selftext`/`body` and any
/// passthrough fields (score, subreddit, permalink, ...) are optional.
pub type RawRecord = Map<String, Value>;

/// Placeholder used when a record carries no usable `id`
pub const UNKNOWN_ID: &str = "unknown";

/// A record field holds a value of the wrong JSON type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field '{field}' must be a string, found {found}")]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,

    /// JSON type that was found instead
    pub found: &'static str,
}

/// Get the record identifier for logging, or `"unknown"`
pub fn record_id(record: &RawRecord) -> &str {
    record
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ID)
}

/// Read an optional text field.
///
/// Absent keys and JSON `null` both read as `None`. Any other non-string
/// value is a `FieldError`; numbers and booleans are deliberately not
/// stringified into text.
pub fn text_field<'a>(record: &'a RawRecord, key: &str) -> Result<Option<&'a str>, FieldError> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(FieldError {
            field: key.to_string(),
            found: json_type_name(other),
        }),
    }
}

/// Read the post body, preferring `selftext` over `body`
pub fn body_field(record: &RawRecord) -> Result<Option<&str>, FieldError> {
    match text_field(record, "selftext")? {
        Some(text) => Ok(Some(text)),
        None => text_field(record, "body"),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
