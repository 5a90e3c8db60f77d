//! Value types for shapewire
//!
//! This module defines the canonical [`Value`] that every encoding funnels
//! through. A typed object is serialized into a [`Value::Mapping`], which is
//! then either flattened into query-style keys or rendered as JSON.
//!
//! ## The Seven Kinds
//!
//! 1. `Null` - absent/omit marker, never emitted as a mapping key
//! 2. `Bool` - boolean true or false
//! 3. `Number` - integer or float, keeping the host numeric kind
//! 4. `String` - UTF-8 encoded string
//! 5. `Bytes` - arbitrary binary data (distinct from String)
//! 6. `Sequence` - ordered list of values
//! 7. `Mapping` - string-keyed map of values, iterated in key order
//!
//! ## Equality Rules
//!
//! - Different kinds are NEVER equal (no coercion)
//! - `Number::I64(1)` != `Number::U64(1)` != `Number::F64(1.0)`
//! - `String("abc")` != `Bytes([97, 98, 99])`
//! - Floats use IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use std::collections::BTreeMap;
use std::fmt;

/// String-keyed collection of values.
///
/// A `BTreeMap` keeps emission order deterministic for both the flattener
/// and the JSON encoder.
pub type Mapping = BTreeMap<String, Value>;

/// Numeric leaf, stored without widening floats or mixing signedness.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Any signed primitive integer
    I64(i64),
    /// Any unsigned primitive integer
    U64(u64),
    /// Single-precision float, kept as-is so its text form is preserved
    F32(f32),
    /// Double-precision float
    F64(f64),
}

impl Number {
    /// Returns the number kind as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::I64(_) => "I64",
            Number::U64(_) => "U64",
            Number::F32(_) => "F32",
            Number::F64(_) => "F64",
        }
    }

    /// True for NaN and infinities, which have no JSON literal
    pub fn is_non_finite(&self) -> bool {
        match self {
            Number::F32(f) => !f.is_finite(),
            Number::F64(f) => !f.is_finite(),
            Number::I64(_) | Number::U64(_) => false,
        }
    }

    /// Lossless view as `i64`, if the value is an integer that fits
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::I64(i) => Some(i),
            Number::U64(u) => i64::try_from(u).ok(),
            Number::F32(_) | Number::F64(_) => None,
        }
    }

    /// Lossless view as `u64`, if the value is a non-negative integer
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::I64(i) => u64::try_from(i).ok(),
            Number::U64(u) => Some(u),
            Number::F32(_) | Number::F64(_) => None,
        }
    }

    /// View as `f64`; integers are converted with the usual `as` rounding
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I64(i) => i as f64,
            Number::U64(u) => u as f64,
            Number::F32(f) => f64::from(f),
            Number::F64(f) => f,
        }
    }
}

impl fmt::Display for Number {
    /// Native textual form, no added formatting or rounding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F32(x) => write!(f, "{}", x),
            Number::F64(x) => write!(f, "{}", x),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a == b,
            (Number::U64(a), Number::U64(b)) => a == b,
            (Number::F32(a), Number::F32(b)) => a == b,
            (Number::F64(a), Number::F64(b)) => a == b,
            _ => false,
        }
    }
}

/// Canonical intermediate value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value; dropped from mappings and flattened output
    #[default]
    Null,

    /// Boolean true or false
    Bool(bool),

    /// Integer or floating-point number
    Number(Number),

    /// UTF-8 encoded string
    String(String),

    /// Arbitrary binary data
    /// NOT equivalent to String - distinct type
    Bytes(Vec<u8>),

    /// Ordered sequence of values
    Sequence(Vec<Value>),

    /// String-keyed map of values
    Mapping(Mapping),
}

impl Value {
    /// Returns the kind name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Sequence(_) => "Sequence",
            Value::Mapping(_) => "Mapping",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for every kind except `Sequence` and `Mapping`
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as number
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as sequence slice
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as mapping reference
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(Number::$variant(n as $wide))
                }
            }
        )*
    };
}

impl_from_number!(I64 as i64: i8, i16, i32, i64, isize);
impl_from_number!(U64 as u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Number(Number::F32(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::F64(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}
