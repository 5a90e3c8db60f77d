//! Convenient imports for shapewire.
//!
//! ```
//! use shapewire::prelude::*;
//!
//! let flat = flatten(&Mapping::new());
//! assert!(flat.is_empty());
//! ```

// Declaring shapes
pub use crate::{Field, FieldHint, FieldRule, HintProvider, Initializable, Location, Serializable};

// Coercion helpers for rule tables
pub use crate::{coerce, nested, nested_list, nested_map, Blob};

// Marshalling entry points
pub use crate::{flatten, flatten_object, init_from, serialize, to_json, to_query_pairs};

// Core types
pub use crate::{Convertible, Error, Mapping, Number, Result, Value};
