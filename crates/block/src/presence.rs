//! Optionality policy shared by every field type.
//!
//! A field is *optional* when the caller passes `allow_nullish` or the block
//! itself says `optional`. Optional fields accept an absent value (missing
//! or JSON `null`) and treat a blank one (whitespace-only string, empty
//! array) as absent. Required fields reject absence with a required issue
//! and hand blank values to the type's own rules.

use formgate_validator::foundation::{ValidationError, ValidationErrors};
use serde_json::Value;

/// Combines the caller override with the block's own flag.
#[must_use]
pub const fn is_optional(allow_nullish: bool, optional: bool) -> bool {
    allow_nullish || optional
}

/// Drops JSON `null`: both it and a missing value mean "absent".
pub(crate) fn present(candidate: Option<&Value>) -> Option<&Value> {
    candidate.filter(|value| !value.is_null())
}

/// Whitespace-only strings and empty arrays.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Name of a JSON value's type, for type-mismatch messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn type_mismatch(expected: &'static str, value: &Value) -> ValidationErrors {
    ValidationError::type_mismatch(expected, json_kind(value)).into()
}

pub(crate) fn expect_str(value: &Value) -> Result<&str, ValidationErrors> {
    value.as_str().ok_or_else(|| type_mismatch("string", value))
}

pub(crate) fn expect_array(value: &Value) -> Result<&[Value], ValidationErrors> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| type_mismatch("array", value))
}
