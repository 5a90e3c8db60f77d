//! Core types for shapewire
//!
//! This crate holds the pieces every encoding shares:
//!
//! - [`Value`] - the canonical intermediate representation
//! - [`FieldHint`] / [`HintProvider`] - per-type field metadata
//! - [`serialize()`] - typed object to [`Mapping`], driven by hints
//! - [`init_from`] - [`Mapping`] back to a typed object
//! - [`Error`] - the error taxonomy shared by all crates
//!
//! Wire encodings (flattening, JSON) live in `shapewire-wire`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod hint;
pub mod initialize;
pub mod serialize;
pub mod value;

pub use convert::{Blob, FromValue, ToValue};
pub use error::{Error, Result};
pub use hint::{find_hint, hint_for_key, hints_for, FieldHint, HintProvider, Location};
pub use initialize::{coerce, init_from, nested, nested_list, nested_map, FieldRule, Initializable};
pub use serialize::{serialize, serialize_all, DynSerializable, Field, Serializable};
pub use value::{Mapping, Number, Value};

/// A type that can be both serialized to and initialized from a [`Mapping`].
pub trait Convertible: Serializable + Initializable {
    /// Serialize `self`
    fn to_mapping(&self) -> Result<Mapping> {
        serialize(self)
    }

    /// Initialize from a mapping
    fn from_mapping(mapping: &Mapping) -> Result<Self> {
        init_from(mapping)
    }
}

impl<T: Serializable + Initializable> Convertible for T {}
