//! # shapewire
//!
//! Hint-driven marshalling of typed objects into wire formats.
//!
//! A type registers [`FieldHint`]s for the fields it wants on the wire. The
//! serializer turns an instance into a canonical [`Mapping`], which is then
//! either flattened into query-style keys or encoded as JSON. Responses go
//! the other way: JSON is decoded into a [`Mapping`] and [`init_from`]
//! builds the typed object.
//!
//! ## Quick Start
//!
//! ```
//! use shapewire::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Item {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! impl HintProvider for Item {
//!     const HINTS: &'static [FieldHint] = &[FieldHint::new("name"), FieldHint::new("tags")];
//! }
//!
//! impl Serializable for Item {
//!     fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
//!         vec![("name", Field::leaf(&self.name)), ("tags", Field::leaf(&self.tags))]
//!     }
//! }
//!
//! let item = Item { name: "a".into(), tags: vec!["x".into(), "y".into()] };
//!
//! // Query-style flat keys
//! let flat = flatten_object(&item).unwrap();
//! assert_eq!(flat["tags.member.1"], Value::from("x"));
//!
//! // JSON body
//! let body = to_json(&Value::Mapping(serialize(&item).unwrap())).unwrap();
//! assert_eq!(body, br#"{"name":"a","tags":["x","y"]}"#);
//! ```
//!
//! ## Crates
//!
//! - `shapewire-core` - value model, hints, serializer, initializer
//! - `shapewire-wire` - flattening, query pairs, JSON

#![warn(missing_docs)]

pub mod prelude;

pub use shapewire_core::{
    coerce, find_hint, hint_for_key, hints_for, init_from, nested, nested_list, nested_map,
    serialize, serialize_all, Blob, Convertible, DynSerializable, Error, Field, FieldHint,
    FieldRule, FromValue, HintProvider, Initializable, Location, Mapping, Number, Result,
    Serializable, ToValue, Value,
};
pub use shapewire_wire::{
    encode_string, flatten, flatten_object, from_json, from_json_mapping, from_json_value,
    to_json, to_json_with, to_query_pairs, DecodeError, FlatMapping, JsonOptions, NonFinite,
    MEMBER_SEGMENT,
};
