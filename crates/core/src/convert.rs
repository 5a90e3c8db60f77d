//! Conversions between native Rust types and [`Value`]
//!
//! [`ToValue`] is the serializer's view of a leaf field and [`FromValue`] is
//! the initializer's coercion into a field type. Both return errors without
//! a path; the serializer and initializer attach the field path as the
//! error travels outward.

use std::collections::{BTreeMap, HashMap};

use base64::Engine;

use crate::error::{Error, Result};
use crate::value::{Mapping, Number, Value};

/// Raw binary payload.
///
/// `Vec<u8>` converts to a sequence of numbers like any other vector; wrap
/// byte payloads in `Blob` to get [`Value::Bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Blob(pub Vec<u8>);

impl Blob {
    /// Borrow the payload
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Blob(bytes.to_vec())
    }
}

/// Leaf conversion used by the serializer.
pub trait ToValue {
    /// Convert to a value; `Value::Null` means "omit".
    fn to_value(&self) -> Result<Value>;
}

/// Coercion used by the initializer.
pub trait FromValue: Sized {
    /// Coerce `value` into `Self`.
    fn from_value(value: &Value) -> Result<Self>;
}

fn mismatch(expected: &str, value: &Value) -> Error {
    Error::conversion(format!("expected {}, got {}", expected, value.type_name()))
}

macro_rules! impl_native_to_value {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Result<Value> {
                    Ok(Value::from(*self))
                }
            }
        )*
    };
}

impl_native_to_value!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl ToValue for i128 {
    fn to_value(&self) -> Result<Value> {
        i64::try_from(*self)
            .map(Value::from)
            .map_err(|_| Error::conversion(format!("{} does not fit in 64 bits", self)))
    }
}

impl ToValue for u128 {
    fn to_value(&self) -> Result<Value> {
        u64::try_from(*self)
            .map(Value::from)
            .map_err(|_| Error::conversion(format!("{} does not fit in 64 bits", self)))
    }
}

impl ToValue for str {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl ToValue for Blob {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bytes(self.0.clone()))
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Value> {
        match self {
            Some(inner) => inner.to_value(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Result<Value> {
        self.iter()
            .enumerate()
            .map(|(i, item)| {
                item.to_value()
                    .map_err(|e| e.at(&format!("member.{}", i + 1)))
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Result<Value> {
        self.as_slice().to_value()
    }
}

fn entries_to_value<'a, T, I>(entries: I) -> Result<Value>
where
    T: ToValue + 'a,
    I: Iterator<Item = (&'a String, &'a T)>,
{
    let mut map = Mapping::new();
    for (key, item) in entries {
        let value = item.to_value().map_err(|e| e.at(key))?;
        if !value.is_null() {
            map.insert(key.clone(), value);
        }
    }
    Ok(Value::Mapping(map))
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Result<Value> {
        entries_to_value(self.iter())
    }
}

impl<T: ToValue, S> ToValue for HashMap<String, T, S> {
    fn to_value(&self) -> Result<Value> {
        entries_to_value(self.iter())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s == "true" => Ok(true),
            Value::String(s) if s == "false" => Ok(false),
            other => Err(mismatch("Bool", other)),
        }
    }
}

macro_rules! impl_int_from_value {
    ($view:ident: $($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self> {
                    let wide = match value {
                        Value::Number(n) => n.$view().ok_or_else(|| {
                            Error::conversion(format!(
                                "{} {} is not a valid {}",
                                n.type_name(),
                                n,
                                stringify!($t)
                            ))
                        })?,
                        Value::String(s) => s.parse().map_err(|_| {
                            Error::conversion(format!("{:?} is not a valid {}", s, stringify!($t)))
                        })?,
                        other => return Err(mismatch(stringify!($t), other)),
                    };
                    <$t>::try_from(wide).map_err(|_| {
                        Error::conversion(format!("{} out of range for {}", wide, stringify!($t)))
                    })
                }
            }
        )*
    };
}

impl_int_from_value!(as_i64: i8, i16, i32, i64, isize);
impl_int_from_value!(as_u64: u8, u16, u32, u64, usize);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) => s
                .parse()
                .map_err(|_| Error::conversion(format!("{:?} is not a valid f64", s))),
            other => Err(mismatch("f64", other)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(Number::F32(f)) => Ok(*f),
            Value::Number(n) => Ok(n.as_f64() as f32),
            Value::String(s) => s
                .parse()
                .map_err(|_| Error::conversion(format!("{:?} is not a valid f32", s))),
            other => Err(mismatch("f32", other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch("String", other)),
        }
    }
}

impl FromValue for Blob {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(Blob(b.clone())),
            // JSON bodies carry binary payloads as base64 text
            Value::String(s) => base64::engine::general_purpose::STANDARD
                .decode(s)
                .map(Blob)
                .map_err(|e| Error::conversion(format!("invalid base64: {}", e))),
            other => Err(mismatch("Bytes", other)),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    T::from_value(item).map_err(|e| e.at(&format!("member.{}", i + 1)))
                })
                .collect(),
            other => Err(mismatch("Sequence", other)),
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Mapping(map) => map
                .iter()
                .map(|(k, v)| {
                    T::from_value(v)
                        .map(|item| (k.clone(), item))
                        .map_err(|e| e.at(k))
                })
                .collect(),
            other => Err(mismatch("Mapping", other)),
        }
    }
}

impl<T: FromValue> FromValue for HashMap<String, T> {
    fn from_value(value: &Value) -> Result<Self> {
        BTreeMap::<String, T>::from_value(value).map(|m| m.into_iter().collect())
    }
}
