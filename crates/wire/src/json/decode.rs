//! JSON decoding for response bodies
//!
//! Parses JSON into the shapewire [`Value`] model so the result can be fed
//! to `init_from`. Integers become `Number::I64` when they fit and
//! `Number::U64` otherwise; all other numbers become `Number::F64`. Bytes
//! arrive as base64 strings and are decoded by the field's coercion rule.

use shapewire_core::{Mapping, Number, Value};
use thiserror::Error;

/// Decode error types
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Invalid JSON syntax
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Top-level value is not an object
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Decode JSON text to a value
pub fn from_json(json: &[u8]) -> Result<Value, DecodeError> {
    let parsed: serde_json::Value = serde_json::from_slice(json)?;
    Ok(from_json_value(parsed))
}

/// Decode JSON text that must be an object
pub fn from_json_mapping(json: &[u8]) -> Result<Mapping, DecodeError> {
    match from_json(json)? {
        Value::Mapping(map) => Ok(map),
        other => Err(DecodeError::NotAnObject(other.type_name())),
    }
}

/// Convert an already-parsed `serde_json` value
pub fn from_json_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(convert_number(&n)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_json_value).collect())
        }
        serde_json::Value::Object(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| (k, from_json_value(v)))
                .collect(),
        ),
    }
}

fn convert_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        // Without arbitrary_precision every non-integer is an f64
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}
