//! Flattening encoder for form/query wire protocols
//!
//! Turns a nested [`Mapping`] into a single-level mapping of scalar leaves:
//!
//! | Nested shape | Flattened keys |
//! |--------------|----------------|
//! | `{"K": {"a": 1}}` | `K.a` |
//! | `{"K": [x, y]}` | `K.member.1`, `K.member.2` |
//! | `{"K": [{"a": 1}]}` | `K.member.1.a` |
//!
//! Sequence indices are 1-based and the `member` segment is fixed by the
//! wire protocol. The traversal is a single explicit-stack loop, so deeply
//! nested input cannot overflow the call stack, and no composite value ever
//! reaches the output.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use shapewire_core::{serialize, Mapping, Result, Serializable, Value};
use tracing::{debug, trace};

/// Flat mapping from dotted path to scalar value, in key order
pub type FlatMapping = BTreeMap<String, Value>;

/// Path segment inserted before each 1-based sequence index
pub const MEMBER_SEGMENT: &str = "member";

/// Flatten a mapping into dotted/indexed keys.
///
/// `Null` leaves are dropped. If two paths render to the same key (a
/// literal `"a.b"` key next to a nested `a.b`), the later one in traversal
/// order wins.
pub fn flatten(mapping: &Mapping) -> FlatMapping {
    let mut flat = FlatMapping::new();

    // Pushed in reverse so entries pop in their natural order
    let mut stack: Vec<(String, &Value)> = mapping
        .iter()
        .rev()
        .map(|(key, value)| (key.clone(), value))
        .collect();

    while let Some((path, value)) = stack.pop() {
        match value {
            Value::Mapping(inner) => {
                for (key, child) in inner.iter().rev() {
                    stack.push((format!("{}.{}", path, key), child));
                }
            }
            Value::Sequence(items) => {
                for (i, child) in items.iter().enumerate().rev() {
                    stack.push((format!("{}.{}.{}", path, MEMBER_SEGMENT, i + 1), child));
                }
            }
            Value::Null => {
                trace!(key = path.as_str(), "dropping null leaf");
            }
            Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Bytes(_) => {
                match flat.entry(path) {
                    Entry::Occupied(mut slot) => {
                        debug!(key = slot.key().as_str(), "flattened key collision, overwriting");
                        slot.insert(value.clone());
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(value.clone());
                    }
                }
            }
        }
    }

    flat
}

/// Serialize an object and flatten the result.
pub fn flatten_object<T: Serializable>(object: &T) -> Result<FlatMapping> {
    serialize(object).map(|mapping| flatten(&mapping))
}
