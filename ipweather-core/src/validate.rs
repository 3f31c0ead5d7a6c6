//! Shape checks for parsed service payloads.
//!
//! Payloads are inspected as untyped JSON so that a missing or mistyped
//! optional field never rejects an otherwise usable response.

use serde_json::Value;

/// Loose presence test used for optional fields: `null`, `false`, `0`, and
/// the empty string count as absent.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn numeric_field(value: &Value, key: &str) -> Option<f64> {
    value
        .get(key)
        .and_then(Value::as_f64)
        .filter(|f| !f.is_nan())
}

/// True iff `value` is an object whose `latitude` and `longitude` are both numbers.
pub fn is_valid_location(value: &Value) -> bool {
    numeric_field(value, "latitude").is_some() && numeric_field(value, "longitude").is_some()
}

/// True iff `value` carries a present `main` block and a non-empty `weather` list.
///
/// `main.temp`, the first condition's fields and `name` are optional.
pub fn is_valid_weather(value: &Value) -> bool {
    let has_main = value.get("main").is_some_and(is_present);
    let has_conditions = value
        .get("weather")
        .and_then(Value::as_array)
        .is_some_and(|list| !list.is_empty());

    has_main && has_conditions
}
