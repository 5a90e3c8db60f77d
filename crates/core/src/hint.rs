//! Field hints and the per-type hint registry
//!
//! A type opts fields into marshalling by listing a [`FieldHint`] for each
//! of them in [`HintProvider::HINTS`]. Fields without a hint are skipped by
//! the serializer, so a type with no hints serializes to an empty mapping.
//!
//! Hint tables are `static` data built at compile time and never mutated,
//! so concurrent readers need no locking.
//!
//! ```
//! use shapewire_core::{FieldHint, HintProvider, Location};
//!
//! struct PutObject;
//!
//! impl HintProvider for PutObject {
//!     const HINTS: &'static [FieldHint] = &[
//!         FieldHint::new("bucket").wire_name("Bucket").location(Location::Uri).required(),
//!         FieldHint::new("acl").wire_name("x-amz-acl").location(Location::Header),
//!     ];
//! }
//!
//! let hints = shapewire_core::hints_for::<PutObject>();
//! assert_eq!(hints[0].key(), "Bucket");
//! ```

use crate::error::{Error, Result};

/// Where a field belongs in an outgoing request.
///
/// Carried for the request builder; marshalling never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Query string parameter
    Query,
    /// HTTP header
    Header,
    /// Path segment of the request URI
    Uri,
    /// Request body
    Body,
}

/// Per-field marshalling metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHint {
    /// Field name, matched case-insensitively
    pub label: &'static str,
    /// Emitted key; defaults to `label`
    pub wire_name: Option<&'static str>,
    /// Request location, for the request builder
    pub location: Option<Location>,
    /// Whether initialization fails when the key is missing
    pub required: bool,
}

impl FieldHint {
    /// Hint for `label` with no overrides
    pub const fn new(label: &'static str) -> Self {
        FieldHint {
            label,
            wire_name: None,
            location: None,
            required: false,
        }
    }

    /// Override the emitted key
    pub const fn wire_name(mut self, name: &'static str) -> Self {
        self.wire_name = Some(name);
        self
    }

    /// Tag the request location
    pub const fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Mark the field required for initialization
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Key under which the field is emitted and looked up
    pub fn key(&self) -> &'static str {
        self.wire_name.unwrap_or(self.label)
    }

    /// Case-insensitive label match
    pub fn matches(&self, field: &str) -> bool {
        self.label.eq_ignore_ascii_case(field)
    }
}

/// Static hint table for a type. The default is empty.
pub trait HintProvider {
    /// Hints for the type's fields, in declaration order
    const HINTS: &'static [FieldHint] = &[];
}

/// Hint table registered for `T`.
pub fn hints_for<T: HintProvider + ?Sized>() -> &'static [FieldHint] {
    T::HINTS
}

/// Find the hint for `field`, failing if more than one hint matches.
pub fn find_hint<'a>(hints: &'a [FieldHint], field: &str) -> Result<Option<&'a FieldHint>> {
    let mut matching = hints.iter().filter(|h| h.matches(field));
    let first = matching.next();
    if first.is_some() && matching.next().is_some() {
        return Err(Error::DuplicateHint {
            label: field.to_string(),
        });
    }
    Ok(first)
}

/// Reverse lookup by emitted key.
///
/// Lets a request builder route a top-level (or flattened) key back to its
/// hint. A flattened key matches the hint whose key is a whole-segment
/// prefix of it, so wire names containing dots resolve too.
pub fn hint_for_key<'a>(hints: &'a [FieldHint], key: &str) -> Option<&'a FieldHint> {
    hints.iter().find(|h| h.key() == key).or_else(|| {
        hints
            .iter()
            .filter(|h| {
                key.strip_prefix(h.key())
                    .is_some_and(|rest| rest.starts_with('.'))
            })
            .max_by_key(|h| h.key().len())
    })
}
