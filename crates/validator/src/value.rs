//! Helpers over `serde_json::Value` shared by the built-in validators.

use std::borrow::Cow;

use serde_json::Value;

/// Validator-specific parameters carried by a rule.
pub type Params = serde_json::Map<String, Value>;

/// Strict equality between two field values.
///
/// Numbers compare by numeric value, so `1` and `1.0` are equal; every other
/// kind compares structurally.
#[must_use]
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// Returns true when a value counts as "nothing": null, `false`, zero, or an
/// empty string, array or object.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Textual form of a scalar for pattern matching.
///
/// Strings are borrowed as-is; numbers and booleans use their JSON spelling.
/// Null and structured values have no text form.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
