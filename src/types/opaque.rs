//! Opaque nested configuration
//!
//! Several conversational-AI records carry vendor-defined configuration whose
//! schema moves faster than this crate. It is kept as a `serde_json::Value`
//! and stored by the resource layer as text. The text form produced here is
//! stable: object keys are sorted at every depth and the encoding is compact,
//! so equal values always render to equal strings.

use serde_json::{Map, Value};

/// Rebuild `value` with object keys in sorted order at every depth.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::with_capacity(map.len());
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Stable textual encoding of an opaque mapping.
pub fn to_stable_text(value: &Value) -> String {
    canonicalize(value).to_string()
}

/// Parse text previously produced by [`to_stable_text`] (or any JSON).
pub fn from_text(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// True when both texts decode to the same JSON value, regardless of key
/// order or whitespace.
pub fn semantically_equal(a: &str, b: &str) -> bool {
    match (from_text(a), from_text(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
