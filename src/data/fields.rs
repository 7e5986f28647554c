//! Required-field lookups on loose JSON objects.
//!
//! Every helper fails with `SnapshotError::missing_field` when the field
//! is absent, `null`, or of the wrong type. The caller's location is
//! reported, not this module's.

use serde_json::Value;

use crate::error::SnapshotError;

/// Borrow the object map, failing if `value` is not an object.
#[track_caller]
pub fn as_object<'a>(
    value: &'a Value,
    object: &str,
) -> Result<&'a serde_json::Map<String, Value>, SnapshotError> {
    value
        .as_object()
        .ok_or_else(|| SnapshotError::new(format!("{object}: expected a JSON object")))
}

/// Required string field.
#[track_caller]
pub fn required_str(value: &Value, object: &str, field: &str) -> Result<String, SnapshotError> {
    match value.get(field).and_then(Value::as_str) {
        Some(s) => Ok(s.to_owned()),
        None => Err(SnapshotError::missing_field(object, field)),
    }
}

/// Required non-negative integer field that fits in `u32`.
#[track_caller]
pub fn required_u32(value: &Value, object: &str, field: &str) -> Result<u32, SnapshotError> {
    match value
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
    {
        Some(n) => Ok(n),
        None => Err(SnapshotError::missing_field(object, field)),
    }
}

/// Optional string field. `null` counts as absent.
#[must_use]
pub fn optional_str(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_owned)
}
