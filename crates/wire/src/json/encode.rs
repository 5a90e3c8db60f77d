//! JSON encoding for shapewire values
//!
//! Compact output with keys in mapping order. Bytes are base64 strings,
//! numbers use their native text form, and strings are escaped.

use base64::Engine;
use shapewire_core::{Error, Mapping, Number, Result, Value};

use super::options::{JsonOptions, NonFinite};

/// Encode a value to UTF-8 JSON with default options
pub fn to_json(value: &Value) -> Result<Vec<u8>> {
    to_json_with(value, &JsonOptions::default())
}

/// Encode a value to UTF-8 JSON
pub fn to_json_with(value: &Value, options: &JsonOptions) -> Result<Vec<u8>> {
    let mut out = String::new();
    write_value(&mut out, value, options)?;
    Ok(out.into_bytes())
}

fn write_value(out: &mut String, value: &Value, options: &JsonOptions) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(out, n, options)?,
        Value::String(s) => out.push_str(&encode_string(s)),
        Value::Bytes(b) => {
            out.push('"');
            out.push_str(&base64::engine::general_purpose::STANDARD.encode(b));
            out.push('"');
        }
        Value::Sequence(items) => write_sequence(out, items, options)?,
        Value::Mapping(map) => write_mapping(out, map, options)?,
    }
    Ok(())
}

fn write_number(out: &mut String, n: &Number, options: &JsonOptions) -> Result<()> {
    if n.is_non_finite() {
        return match options.non_finite {
            NonFinite::Reject => Err(Error::unsupported(format!(
                "non-finite number {} has no JSON form",
                n
            ))),
            NonFinite::Null => {
                out.push_str("null");
                Ok(())
            }
        };
    }
    out.push_str(&n.to_string());
    Ok(())
}

fn write_sequence(out: &mut String, items: &[Value], options: &JsonOptions) -> Result<()> {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_value(out, item, options).map_err(|e| e.at(&format!("member.{}", i + 1)))?;
    }
    out.push(']');
    Ok(())
}

/// Null entries are skipped; the serializer never produces them.
fn write_mapping(out: &mut String, map: &Mapping, options: &JsonOptions) -> Result<()> {
    out.push('{');
    let mut first = true;
    for (key, value) in map.iter().filter(|(_, v)| !v.is_null()) {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&encode_string(key));
        out.push(':');
        write_value(out, value, options).map_err(|e| e.at(key))?;
    }
    out.push('}');
    Ok(())
}

/// Encode a string with proper JSON escaping
pub fn encode_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
