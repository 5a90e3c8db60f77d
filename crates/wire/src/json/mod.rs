//! JSON wire encoding for shapewire values
//!
//! - [`to_json`] renders a value as compact UTF-8 JSON
//! - [`from_json`] parses a response body back into a value
//!
//! Bytes travel as base64 strings, so a decoded `Bytes` value comes back as
//! a `String`; the `Blob` coercion accepts either form.

mod decode;
mod encode;
mod options;

pub use decode::{from_json, from_json_mapping, from_json_value, DecodeError};
pub use encode::{encode_string, to_json, to_json_with};
pub use options::{JsonOptions, NonFinite};
