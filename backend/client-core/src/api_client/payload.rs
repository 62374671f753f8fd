//! Body parsing and error detail shaping.

use serde_json::Value;

const DETAIL_KEY: &str = "detail";

/// Parse a response body without ever failing.
///
/// Empty bodies become `Null`, valid JSON is parsed, anything else is kept as
/// the raw text in a `Value::String`.
pub fn parse_safely(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }

    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// The `detail` field of an object payload, otherwise the whole payload.
pub fn extract_detail(payload: &Value) -> Value {
    match payload {
        Value::Object(map) if map.contains_key(DETAIL_KEY) => {
            map.get(DETAIL_KEY).cloned().unwrap_or(Value::Null)
        }
        other => other.clone(),
    }
}
