//! Records: the data under validation.
//!
//! A record is a JSON object. `serde_json` is built with `preserve_order`, so
//! field order is insertion order all the way through.

use serde::Serialize;

pub use serde_json::Value;

/// String-keyed, insertion-ordered mapping; values may be nested records.
pub type Record = serde_json::Map<String, Value>;

/// Errors raised while turning a typed value into a [`Record`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The value could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The value serialized to something other than a JSON object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Converts any serializable value (typically a struct) into a [`Record`].
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use warden_validator::record::to_record;
///
/// #[derive(Serialize)]
/// struct Customer {
///     username: String,
///     email: Option<String>,
/// }
///
/// let record = to_record(&Customer { username: "User123".into(), email: None }).unwrap();
/// assert_eq!(record["username"], "User123");
/// assert!(record["email"].is_null());
/// ```
pub fn to_record<T>(value: &T) -> Result<Record, RecordError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::Object(record) => Ok(record),
        other => Err(RecordError::NotAnObject(json_type_name(&other))),
    }
}

/// Looks up `key`, treating JSON `null` the same as a missing field.
pub(crate) fn field<'a>(record: &'a Record, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| !value.is_null())
}

/// Returns the JSON type name of a value.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
