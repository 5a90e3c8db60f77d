//! Wire encodings for shapewire
//!
//! This crate turns the canonical [`Mapping`](shapewire_core::Mapping)
//! produced by the serializer into the two wire formats a request builder
//! needs:
//!
//! - [`flatten()`] - dotted/indexed keys for form and query-string protocols,
//!   rendered to string pairs by [`to_query_pairs`]
//! - [`to_json`] - compact JSON text for request bodies
//!
//! ## Flattening Rules
//!
//! | Value | Flattened |
//! |-------|-----------|
//! | `{"Owner": {"Id": "7"}}` | `Owner.Id=7` |
//! | `{"Tags": ["x", "y"]}` | `Tags.member.1=x`, `Tags.member.2=y` |
//! | `{"Items": [{"Name": "a"}]}` | `Items.member.1.Name=a` |
//!
//! ## JSON Encoding Rules
//!
//! | Value Type | JSON Encoding |
//! |------------|--------------|
//! | Null | omitted in mappings, `null` in sequences |
//! | Bool | `true`/`false` |
//! | Number | native decimal text |
//! | String | `"..."`, escaped |
//! | Bytes | `"<base64>"` |
//! | Sequence | `[...]` |
//! | Mapping | `{...}` |
//!
//! ## Examples
//!
//! ```
//! use shapewire_core::{Mapping, Value};
//! use shapewire_wire::{flatten, to_json};
//!
//! let mut map = Mapping::new();
//! map.insert("name".to_string(), Value::from("a"));
//! map.insert(
//!     "tags".to_string(),
//!     Value::Sequence(vec![Value::from("x"), Value::from("y")]),
//! );
//!
//! let flat = flatten(&map);
//! assert_eq!(flat["tags.member.2"], Value::from("y"));
//!
//! let json = to_json(&Value::Mapping(map)).unwrap();
//! assert_eq!(json, br#"{"name":"a","tags":["x","y"]}"#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod flatten;
pub mod json;
pub mod query;

// Re-export main types
pub use flatten::{flatten, flatten_object, FlatMapping, MEMBER_SEGMENT};
pub use json::{
    encode_string, from_json, from_json_mapping, from_json_value, to_json, to_json_with,
    DecodeError, JsonOptions, NonFinite,
};
pub use query::to_query_pairs;
