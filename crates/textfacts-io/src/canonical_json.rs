//! Deterministic JSON canonicalization.
//!
//! Reports are hashed over canonical bytes: object keys sorted, array order
//! kept, minified output. Resolution types carry no floats.

use serde::Serialize;
use serde_json::{Map, Value};

/// Serialize `value` to canonical JSON bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let canon = canonicalize(serde_json::to_value(value)?);
    serde_json::to_vec(&canon)
}

/// Serialize `value` to a canonical JSON string.
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let canon = canonicalize(serde_json::to_value(value)?);
    serde_json::to_string(&canon)
}

/// Deep-sort object keys. Arrays and scalars are left as they are.
pub fn canonicalize(v: Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize(v)))
                    .collect::<Map<_, _>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
