//! Ordered map type for encoded objects.
//!
//! This module provides [`FormMap`], a wrapper around [`IndexMap`] that keeps
//! object properties in the order their fields were first submitted. Property
//! order is observable in the encoded output, so a hash map would make the
//! encoder non-deterministic.
//!
//! Replacing the value of an existing key keeps that key's original position,
//! which is what the tree builder relies on when it coerces a value in place.
//!
//! ## Examples
//!
//! ```rust
//! use form_json::{FormMap, FormValue};
//!
//! let mut map = FormMap::new();
//! map.insert("name".to_string(), FormValue::from("Bender"));
//! map.insert("shiny".to_string(), FormValue::from("true"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Bender"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to form values.
///
/// # Examples
///
/// ```rust
/// use form_json::{FormMap, FormValue};
///
/// let mut map = FormMap::new();
/// map.insert("first".to_string(), FormValue::from(1));
/// map.insert("second".to_string(), FormValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FormMap(IndexMap<String, crate::FormValue>);

impl FormMap {
    /// Creates an empty `FormMap`.
    #[must_use]
    pub fn new() -> Self {
        FormMap(IndexMap::new())
    }

    /// Creates an empty `FormMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FormMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_json::{FormMap, FormValue};
    ///
    /// let mut map = FormMap::new();
    /// map.insert("a".to_string(), FormValue::from(1));
    /// map.insert("b".to_string(), FormValue::from(2));
    /// assert!(map.insert("a".to_string(), FormValue::from(3)).is_some());
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn insert(&mut self, key: String, value: crate::FormValue) -> Option<crate::FormValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::FormValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::FormValue> {
        self.0.get_mut(key)
    }

    pub(crate) fn entry(&mut self, key: String) -> indexmap::map::Entry<'_, String, crate::FormValue> {
        self.0.entry(key)
    }

    /// Returns `true` if the map contains a value for the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::FormValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::FormValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::FormValue> {
        self.0.iter()
    }
}

impl Default for FormMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FormMap> for HashMap<String, crate::FormValue> {
    fn from(map: FormMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for FormMap {
    type Item = (String, crate::FormValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormMap {
    type Item = (&'a String, &'a crate::FormValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::FormValue)> for FormMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::FormValue)>>(iter: T) -> Self {
        FormMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormValue;

    #[test]
    fn test_replace_keeps_position() {
        let mut map = FormMap::new();
        map.insert("x".to_string(), FormValue::from("1"));
        map.insert("y".to_string(), FormValue::from("2"));
        map.insert("x".to_string(), FormValue::Array(vec![]));

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert!(map.get("x").is_some_and(FormValue::is_array));
    }

    #[test]
    fn test_get_mut() {
        let mut map = FormMap::new();
        map.insert("k".to_string(), FormValue::from("old"));
        if let Some(value) = map.get_mut("k") {
            *value = FormValue::from("new");
        }
        assert_eq!(map.get("k").and_then(FormValue::as_str), Some("new"));
        assert!(map.get_mut("missing").is_none());
    }
}
