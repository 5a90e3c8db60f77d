//! Hint-driven object serializer
//!
//! A type lists its fields once in [`Serializable::fields`]; the serializer
//! keeps only the fields that have a hint, unwraps optionals, recurses into
//! nested objects and stores each result under the hint's key.
//!
//! ```
//! use shapewire_core::{serialize, Field, FieldHint, HintProvider, Serializable, Value};
//!
//! struct Tag {
//!     key: String,
//!     value: Option<String>,
//! }
//!
//! impl HintProvider for Tag {
//!     const HINTS: &'static [FieldHint] = &[
//!         FieldHint::new("key").wire_name("Key"),
//!         FieldHint::new("value").wire_name("Value"),
//!     ];
//! }
//!
//! impl Serializable for Tag {
//!     fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
//!         vec![("key", Field::leaf(&self.key)), ("value", Field::leaf(&self.value))]
//!     }
//! }
//!
//! let tag = Tag { key: "env".into(), value: None };
//! let mapping = serialize(&tag).unwrap();
//! assert_eq!(mapping.get("Key"), Some(&Value::from("env")));
//! assert!(!mapping.contains_key("Value"));
//! ```

use std::collections::btree_map::Entry;
use std::fmt::Display;

use tracing::{debug, trace};

use crate::convert::ToValue;
use crate::error::Result;
use crate::hint::{find_hint, FieldHint, HintProvider};
use crate::value::{Mapping, Value};

/// A type whose hinted fields can be serialized to a [`Mapping`].
pub trait Serializable: HintProvider {
    /// Every field of the instance, by name, in any order.
    ///
    /// Unhinted fields may be listed; they are skipped.
    fn fields(&self) -> Vec<(&'static str, Field<'_>)>;
}

/// Object-safe view of a [`Serializable`], used for nested objects.
pub trait DynSerializable {
    /// Hint table of the concrete type
    fn dyn_hints(&self) -> &'static [FieldHint];
    /// Fields of the instance
    fn dyn_fields(&self) -> Vec<(&'static str, Field<'_>)>;
}

impl<T: Serializable> DynSerializable for T {
    fn dyn_hints(&self) -> &'static [FieldHint] {
        T::HINTS
    }

    fn dyn_fields(&self) -> Vec<(&'static str, Field<'_>)> {
        self.fields()
    }
}

/// Shape of a field value, matched exhaustively by the serializer.
pub enum Field<'a> {
    /// Explicit null; omitted from output
    Null,
    /// Leaf stored verbatim (an empty `Option` converts to `Null`)
    Leaf(&'a dyn ToValue),
    /// Nested object, serialized to a `Mapping`
    Object(&'a dyn DynSerializable),
    /// Sequence of objects, serialized to a `Sequence` of `Mapping`
    List(Vec<&'a dyn DynSerializable>),
    /// Keyed collection of objects, serialized to a `Mapping` keyed by the
    /// stringified original key
    Keyed(Vec<(String, &'a dyn DynSerializable)>),
}

impl<'a> Field<'a> {
    /// Leaf field
    pub fn leaf<T: ToValue>(value: &'a T) -> Self {
        Field::Leaf(value)
    }

    /// Nested object field
    pub fn object<T: Serializable>(object: &'a T) -> Self {
        Field::Object(object)
    }

    /// Sequence-of-objects field
    pub fn list<T: Serializable>(items: &'a [T]) -> Self {
        Field::List(items.iter().map(|i| i as &dyn DynSerializable).collect())
    }

    /// Keyed-collection field; keys are stringified with `Display`
    pub fn keyed<K, T, I>(entries: I) -> Self
    where
        K: Display + 'a,
        T: Serializable + 'a,
        I: IntoIterator<Item = (&'a K, &'a T)>,
    {
        Field::Keyed(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v as &dyn DynSerializable))
                .collect(),
        )
    }
}

/// `None` becomes [`Field::Null`], so optional objects read as
/// `self.owner.as_ref().map(Field::object).into()`.
impl<'a> From<Option<Field<'a>>> for Field<'a> {
    fn from(field: Option<Field<'a>>) -> Self {
        field.unwrap_or(Field::Null)
    }
}

/// Serialize an object's hinted fields into a mapping.
pub fn serialize<T: Serializable>(object: &T) -> Result<Mapping> {
    serialize_dyn(object)
}

/// Serialize each element, failing on the first error.
pub fn serialize_all<T: Serializable>(items: &[T]) -> Result<Vec<Mapping>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| serialize(item).map_err(|e| e.at(&format!("member.{}", i + 1))))
        .collect()
}

fn serialize_dyn(object: &dyn DynSerializable) -> Result<Mapping> {
    let hints = object.dyn_hints();
    let mut out = Mapping::new();

    for (name, field) in object.dyn_fields() {
        let Some(hint) = find_hint(hints, name)? else {
            trace!(field = name, "no hint registered, skipping field");
            continue;
        };

        let key = hint.key();
        let value = field_to_value(field).map_err(|e| e.at(key))?;
        if value.is_null() {
            continue;
        }
        out.insert(key.to_string(), value);
    }

    Ok(out)
}

fn field_to_value(field: Field<'_>) -> Result<Value> {
    match field {
        Field::Null => Ok(Value::Null),
        Field::Leaf(leaf) => leaf.to_value(),
        Field::Object(object) => serialize_dyn(object).map(Value::Mapping),
        Field::List(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serialize_dyn(item)
                    .map(Value::Mapping)
                    .map_err(|e| e.at(&format!("member.{}", i + 1)))
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Field::Keyed(entries) => {
            let mut map = Mapping::new();
            for (key, item) in entries {
                let value = Value::Mapping(serialize_dyn(item).map_err(|e| e.at(&key))?);
                match map.entry(key) {
                    Entry::Occupied(mut slot) => {
                        debug!(key = slot.key().as_str(), "keyed entries collide, overwriting");
                        slot.insert(value);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
            Ok(Value::Mapping(map))
        }
    }
}
