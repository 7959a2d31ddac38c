//! Attribute dictionaries and typed access to them.
//!
//! SWIFT replicates its entire runtime configuration into the snapshot as
//! HDF5 attributes, group by group, so everything the parser consumes is a
//! plain name/value map. Values keep their stored flavour (integer, float,
//! string, scalar or array); the getters below perform the conversions the
//! parser relies on. In particular the `Parameters` group stores every value
//! as text, so the numeric getters also parse numbers out of strings.

use std::collections::HashMap;

use crate::error::Error;

/// A decoded attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
    I64Array(Vec<i64>),
    F64Array(Vec<f64>),
    StringArray(Vec<String>),
}

impl AttrValue {
    /// Short name of the stored flavour, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::I64(_) => "integer",
            AttrValue::U64(_) => "unsigned integer",
            AttrValue::F64(_) => "float",
            AttrValue::String(_) => "string",
            AttrValue::I64Array(_) => "integer array",
            AttrValue::F64Array(_) => "float array",
            AttrValue::StringArray(_) => "string array",
        }
    }
}

/// The attribute dictionary of one snapshot group.
pub type AttrMap = HashMap<String, AttrValue>;

fn missing(group: &str, key: &str) -> Error {
    Error::AttributeNotFound(format!("{group}/{key}"))
}

fn mismatch(group: &str, key: &str, want: &str, got: &AttrValue) -> Error {
    Error::TypeError(format!("{group}/{key}: expected {want}, found {}", got.kind()))
}

fn as_f64(value: &AttrValue) -> Option<f64> {
    match value {
        AttrValue::F64(v) => Some(*v),
        AttrValue::I64(v) => Some(*v as f64),
        AttrValue::U64(v) => Some(*v as f64),
        AttrValue::String(s) => s.trim().parse().ok(),
        AttrValue::F64Array(a) if a.len() == 1 => Some(a[0]),
        AttrValue::I64Array(a) if a.len() == 1 => Some(a[0] as f64),
        _ => None,
    }
}

fn as_i64(value: &AttrValue) -> Option<i64> {
    match value {
        AttrValue::I64(v) => Some(*v),
        AttrValue::U64(v) => i64::try_from(*v).ok(),
        // Truncates toward zero, matching integer conversion of a float flag.
        AttrValue::F64(v) => Some(*v as i64),
        AttrValue::String(s) => s.trim().parse().ok(),
        AttrValue::I64Array(a) if a.len() == 1 => Some(a[0]),
        _ => None,
    }
}

/// Fetch `key` from `attrs` as a float.
///
/// Accepts any numeric flavour, numeric strings and one-element numeric
/// arrays; `group` only labels the error.
pub fn require_f64(attrs: &AttrMap, group: &str, key: &str) -> Result<f64, Error> {
    let value = attrs.get(key).ok_or_else(|| missing(group, key))?;
    as_f64(value).ok_or_else(|| mismatch(group, key, "a number", value))
}

/// Fetch `key` from `attrs` as an integer.
///
/// Floats truncate toward zero; strings must parse as plain integers.
pub fn require_i64(attrs: &AttrMap, group: &str, key: &str) -> Result<i64, Error> {
    let value = attrs.get(key).ok_or_else(|| missing(group, key))?;
    as_i64(value).ok_or_else(|| mismatch(group, key, "an integer", value))
}

/// Fetch `key` from `attrs` as a string slice.
///
/// One-element string arrays are accepted as scalars.
pub fn require_str<'a>(attrs: &'a AttrMap, group: &str, key: &str) -> Result<&'a str, Error> {
    let value = attrs.get(key).ok_or_else(|| missing(group, key))?;
    match value {
        AttrValue::String(s) => Ok(s),
        AttrValue::StringArray(a) if a.len() == 1 => Ok(&a[0]),
        _ => Err(mismatch(group, key, "a string", value)),
    }
}

/// Fetch `key` from `attrs` as a float vector.
///
/// Numeric scalars come back as one-element vectors, so callers see the
/// shape the snapshot stored without caring whether the writer used a
/// scalar or a one-element array.
pub fn require_f64_vec(attrs: &AttrMap, group: &str, key: &str) -> Result<Vec<f64>, Error> {
    let value = attrs.get(key).ok_or_else(|| missing(group, key))?;
    match value {
        AttrValue::F64Array(a) => Ok(a.clone()),
        AttrValue::I64Array(a) => Ok(a.iter().map(|v| *v as f64).collect()),
        AttrValue::F64(v) => Ok(vec![*v]),
        AttrValue::I64(v) => Ok(vec![*v as f64]),
        AttrValue::U64(v) => Ok(vec![*v as f64]),
        _ => Err(mismatch(group, key, "a numeric array", value)),
    }
}
