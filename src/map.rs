//! Ordered map type for XML mapping nodes.
//!
//! This module provides [`XmlMap`], a wrapper around [`IndexMap`] that keeps
//! keys unique and preserves insertion order. Order preservation is
//! load-bearing in two places:
//!
//! - **Exclusion**: subtrees under an excluded field must come out of the
//!   formatter byte-identical to the input, so their key order cannot be
//!   disturbed by the map itself.
//! - **Fingerprint fallback**: when a field has no sort-key override, its
//!   identity fingerprint walks the mapping's own keys in natural order.
//!
//! ## Examples
//!
//! ```rust
//! use canonxml::{XmlMap, XmlValue};
//!
//! let mut map = XmlMap::new();
//! map.insert("field".to_string(), XmlValue::from("Account.Name"));
//! map.insert("editable".to_string(), XmlValue::from("true"));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["field", "editable"]);
//! ```

use indexmap::IndexMap;

/// An insertion-ordered map of string keys to XML values.
///
/// Thin wrapper around [`IndexMap`]; keys are unique, iteration follows
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlMap(IndexMap<String, crate::XmlValue>);

impl XmlMap {
    /// Creates an empty `XmlMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canonxml::XmlMap;
    ///
    /// let map = XmlMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        XmlMap(IndexMap::new())
    }

    /// Creates an empty `XmlMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        XmlMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::XmlValue) -> Option<crate::XmlValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canonxml::{XmlMap, XmlValue};
    ///
    /// let mut map = XmlMap::new();
    /// map.insert("name".to_string(), XmlValue::from("Admin"));
    /// assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Admin"));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::XmlValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::XmlValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::XmlValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::XmlValue> {
        self.0.iter()
    }
}

impl Default for XmlMap {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for XmlMap {
    type Item = (String, crate::XmlValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::XmlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a XmlMap {
    type Item = (&'a String, &'a crate::XmlValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::XmlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::XmlValue)> for XmlMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::XmlValue)>>(iter: T) -> Self {
        XmlMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::XmlValue;

    #[test]
    fn preserves_insertion_order() {
        let mut map = XmlMap::new();
        map.insert("zeta".to_string(), XmlValue::from("1"));
        map.insert("alpha".to_string(), XmlValue::from("2"));
        map.insert("mid".to_string(), XmlValue::from("3"));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut map = XmlMap::new();
        map.insert("a".to_string(), XmlValue::from("1"));
        map.insert("b".to_string(), XmlValue::from("2"));
        let old = map.insert("a".to_string(), XmlValue::from("3"));

        assert_eq!(old, Some(XmlValue::from("1")));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a").and_then(|v| v.as_str()), Some("3"));
    }

    #[test]
    fn from_iterator_collects_pairs() {
        let map: XmlMap = vec![
            ("x".to_string(), XmlValue::from("1")),
            ("y".to_string(), XmlValue::from("2")),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert!(map.contains_key("x"));
        assert!(map.contains_key("y"));
    }
}
