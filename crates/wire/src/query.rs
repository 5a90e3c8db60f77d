//! String rendering of flattened leaves for query/form encoding

use base64::Engine;
use shapewire_core::{Error, Result, Value};

use crate::flatten::FlatMapping;

/// Render each flattened leaf as a string, in key order.
///
/// Strings pass through, numbers use their native text, booleans are
/// lowercase and bytes are base64. Percent-encoding is left to the request
/// builder.
pub fn to_query_pairs(flat: &FlatMapping) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(flat.len());
    for (key, value) in flat {
        let text = match value {
            Value::Null => continue,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Bytes(b) => base64::engine::general_purpose::STANDARD.encode(b),
            Value::Sequence(_) | Value::Mapping(_) => {
                return Err(Error::unsupported(format!(
                    "{} is not a flat leaf",
                    value.type_name()
                ))
                .at(key))
            }
        };
        pairs.push((key.clone(), text));
    }
    Ok(pairs)
}
