//! Hint-driven object initializer
//!
//! The reverse of [`serialize`](crate::serialize()): a mapping (usually parsed
//! from a response body) is turned back into a typed object. The type's
//! hints decide which keys are read and which are required; its
//! [`FieldRule`] table decides how each present value is coerced into the
//! field.
//!
//! Initialization is all-or-nothing. A `Default` draft is filled in and
//! only returned once every hint has been processed successfully.

use std::collections::BTreeMap;

use tracing::trace;

use crate::convert::FromValue;
use crate::error::{Error, Result};
use crate::hint::{find_hint, HintProvider};
use crate::value::{Mapping, Value};

/// Assigns a coerced value to one field of a draft object.
pub type Assign<T> = fn(&mut T, &Value) -> Result<()>;

/// Coercion rule for one field, matched to its hint by label.
pub struct FieldRule<T> {
    /// Field label, matched case-insensitively against hint labels
    pub label: &'static str,
    /// Coerce the value and store it in the draft
    pub assign: Assign<T>,
}

impl<T> FieldRule<T> {
    /// Rule for `label`
    pub const fn new(label: &'static str, assign: Assign<T>) -> Self {
        FieldRule { label, assign }
    }
}

/// A type that can be built from a [`Mapping`].
pub trait Initializable: HintProvider + Default + 'static {
    /// Coercion rules; hints with no rule are serialize-only
    const RULES: &'static [FieldRule<Self>];
}

/// Build `T` from a mapping.
///
/// Fails with [`Error::MissingRequiredParam`] when a required hint's key is
/// absent (or null), and with [`Error::Conversion`] when a present value
/// cannot be coerced. An ambiguous hint or rule table fails with
/// [`Error::DuplicateHint`] before any value is read.
pub fn init_from<T: Initializable>(mapping: &Mapping) -> Result<T> {
    check_tables::<T>()?;

    let mut draft = T::default();

    for hint in T::HINTS {
        let key = hint.key();
        let value = match mapping.get(key) {
            Some(value) if !value.is_null() => value,
            _ if hint.required => {
                return Err(Error::MissingRequiredParam {
                    field: key.to_string(),
                })
            }
            _ => continue,
        };

        let Some(rule) = T::RULES.iter().find(|r| hint.matches(r.label)) else {
            trace!(field = hint.label, "no rule registered, skipping hint");
            continue;
        };

        (rule.assign)(&mut draft, value).map_err(|e| e.at(key))?;
    }

    Ok(draft)
}

/// Each hint label and each rule label matches at most one hint, and no two
/// rules share a label.
fn check_tables<T: Initializable>() -> Result<()> {
    for hint in T::HINTS {
        find_hint(T::HINTS, hint.label)?;
    }
    for rule in T::RULES {
        find_hint(T::HINTS, rule.label)?;
        if T::RULES.iter().filter(|r| r.label.eq_ignore_ascii_case(rule.label)).count() > 1 {
            return Err(Error::DuplicateHint {
                label: rule.label.to_string(),
            });
        }
    }
    Ok(())
}

/// Coerce a leaf or leaf collection.
pub fn coerce<U: FromValue>(value: &Value) -> Result<U> {
    U::from_value(value)
}

/// Initialize a nested object from a `Mapping` value.
pub fn nested<U: Initializable>(value: &Value) -> Result<U> {
    match value {
        Value::Mapping(map) => init_from(map),
        other => Err(Error::conversion(format!(
            "expected Mapping, got {}",
            other.type_name()
        ))),
    }
}

/// Initialize a list of nested objects from a `Sequence` value.
pub fn nested_list<U: Initializable>(value: &Value) -> Result<Vec<U>> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| nested(item).map_err(|e| e.at(&format!("member.{}", i + 1))))
            .collect(),
        other => Err(Error::conversion(format!(
            "expected Sequence, got {}",
            other.type_name()
        ))),
    }
}

/// Initialize a keyed collection of nested objects from a `Mapping` value.
pub fn nested_map<U: Initializable>(value: &Value) -> Result<BTreeMap<String, U>> {
    match value {
        Value::Mapping(map) => map
            .iter()
            .map(|(key, item)| {
                nested(item)
                    .map(|object| (key.clone(), object))
                    .map_err(|e| e.at(key))
            })
            .collect(),
        other => Err(Error::conversion(format!(
            "expected Mapping, got {}",
            other.type_name()
        ))),
    }
}
