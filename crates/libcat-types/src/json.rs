//! Helpers for interpreting loosely-typed JSON request values.

use serde_json::Value;

/// Truthiness as JSON clients expect it: `null`, `false`, `0`, and `""` are
/// falsy, everything else is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interpret a JSON value as an integer.
///
/// A number counts when it has no fractional part and fits in `i64`, so
/// `2020.0` is accepted as `2020`. Strings are never coerced.
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
