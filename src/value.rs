//! Dynamic value representation for encoded form data.
//!
//! This module provides the [`FormValue`] enum, the JSON-like tree the encoder
//! builds from a form data set.
//!
//! ## Core Types
//!
//! - [`FormValue`]: null, bool, number, string, array (with holes), object or
//!   file wrapper
//! - [`Number`]: an integer or floating point number
//!
//! ## Holes
//!
//! Arrays are index-addressable and may be sparse: assigning `x[2]` into an
//! empty array materializes slots `0` and `1` as holes. A hole is stored as
//! `None` and renders as `null`, but unlike an explicit [`FormValue::Null`] it
//! is skipped when an array is re-keyed into an object.
//!
//! ## File wrappers
//!
//! A file field contributes a [`FormValue::File`]: a `name`/`type`/`body`
//! map that renders exactly like an object but is an opaque leaf to the tree
//! builder. Later fields never add properties to it.
//!
//! ```rust
//! use form_json::FormValue;
//!
//! let sparse = FormValue::Array(vec![Some(FormValue::from("a")), None, Some(FormValue::from("c"))]);
//! assert_eq!(sparse.to_string(), r#"["a",null,"c"]"#);
//! ```

use crate::FormMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed JSON-like value.
///
/// # Examples
///
/// ```rust
/// use form_json::{FormValue, Number};
///
/// let null = FormValue::Null;
/// let num = FormValue::Number(Number::Integer(42));
/// let text = FormValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FormValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// An array whose `None` slots are holes.
    Array(Vec<Option<FormValue>>),
    Object(FormMap),
    /// A file wrapper. Rendered as an object, merged as a scalar.
    File(FormMap),
}

/// A numeric value.
///
/// Non-finite floats have no JSON representation and render as `null`.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Converts this number to an `i64` if it has no fractional part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_finite() => write!(f, "{}", fl),
            Number::Float(_) => write!(f, "null"),
        }
    }
}

impl FormValue {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, FormValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, FormValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, FormValue::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, FormValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, FormValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, FormValue::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, FormValue::File(_))
    }

    /// Returns `true` for anything that is neither an array nor an object.
    /// File wrappers are scalars.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !self.is_array() && !self.is_object()
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::FormValue;
    ///
    /// assert_eq!(FormValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(FormValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FormValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is an array, returns its slots (holes are `None`).
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Option<FormValue>>> {
        match self {
            FormValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&FormMap> {
        match self {
            FormValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a file wrapper, returns its `name`/`type`/`body` map.
    #[inline]
    #[must_use]
    pub fn as_file(&self) -> Option<&FormMap> {
        match self {
            FormValue::File(wrapper) => Some(wrapper),
            _ => None,
        }
    }

    /// Looks up an object or file wrapper property by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::form_value;
    ///
    /// let pet = form_value!({ "pet": { "name": "Hypatia" } });
    /// let name = pet.get("pet").and_then(|p| p.get("name"));
    /// assert_eq!(name.and_then(|n| n.as_str()), Some("Hypatia"));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FormValue> {
        match self {
            FormValue::Object(map) | FormValue::File(map) => map.get(key),
            _ => None,
        }
    }

    /// Looks up an array slot by index. Holes and out-of-range indices are `None`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&FormValue> {
        self.as_array()
            .and_then(|arr| arr.get(index))
            .and_then(Option::as_ref)
    }
}

impl fmt::Display for FormValue {
    /// Renders the value as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::value_to_string(self))
    }
}

impl Serialize for FormValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FormValue::Null => serializer.serialize_unit(),
            FormValue::Bool(b) => serializer.serialize_bool(*b),
            FormValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            FormValue::Number(Number::Float(f)) if f.is_finite() => serializer.serialize_f64(*f),
            FormValue::Number(Number::Float(_)) => serializer.serialize_unit(),
            FormValue::String(s) => serializer.serialize_str(s),
            FormValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for slot in arr {
                    // Option<T> serializes as unit for None, i.e. `null`
                    seq.serialize_element(slot)?;
                }
                seq.end()
            }
            FormValue::Object(obj) | FormValue::File(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

impl From<i32> for FormValue {
    fn from(value: i32) -> Self {
        FormValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Number(Number::Integer(value))
    }
}

impl From<u32> for FormValue {
    fn from(value: u32) -> Self {
        FormValue::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Number(Number::Float(value))
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::String(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::String(value.to_string())
    }
}

/// Builds a dense array; every element is present.
impl From<Vec<FormValue>> for FormValue {
    fn from(value: Vec<FormValue>) -> Self {
        FormValue::Array(value.into_iter().map(Some).collect())
    }
}

impl From<FormMap> for FormValue {
    fn from(value: FormMap) -> Self {
        FormValue::Object(value)
    }
}
