//! Tree representation of a parsed XML document.
//!
//! This module provides the [`XmlValue`] enum, the tagged union every stage
//! of the formatting pipeline operates on, and [`Kind`], the result of
//! structural classification.
//!
//! ## The three shapes
//!
//! - [`XmlValue::Leaf`]: element text content (possibly empty). Attribute
//!   values are leaves too.
//! - [`XmlValue::List`]: repeated sibling elements sharing one tag name.
//!   The parser always wraps element children in a list, even a single
//!   occurrence, so repetition is uniform.
//! - [`XmlValue::Mapping`]: an element with attributes or child elements;
//!   keys are child tag names plus the reserved `"$"` (attribute map) and
//!   `"_"` (mixed text content) entries.
//!
//! Because the union is closed, structural classification is a total
//! constructor match — there is no "none of the three shapes" case to
//! handle at runtime.
//!
//! ## Examples
//!
//! ```rust
//! use canonxml::{Kind, XmlValue};
//!
//! let leaf = XmlValue::from("Account.Name");
//! assert_eq!(leaf.kind(), Kind::Leaf);
//! assert_eq!(leaf.as_str(), Some("Account.Name"));
//!
//! let list = XmlValue::List(vec![XmlValue::from("a"), XmlValue::from("b")]);
//! assert_eq!(list.kind(), Kind::List);
//! assert!(list.as_mapping().is_none());
//! ```

use crate::XmlMap;
use std::fmt;

/// Reserved mapping key holding an element's attributes.
pub const ATTRIBUTES_KEY: &str = "$";

/// Reserved mapping key holding an element's text when it also carries
/// attributes or child elements.
pub const TEXT_KEY: &str = "_";

/// A node of the parsed document tree.
///
/// Produced by parsing; consumed and rebuilt by the canonicalizer, which is
/// pure — no node is shared between its input and output.
#[derive(Clone, Debug, PartialEq)]
pub enum XmlValue {
    /// Element or attribute text. The default value is the empty leaf,
    /// which serializes as a self-closing element.
    Leaf(String),
    /// Repeated sibling elements under one tag name, in document order.
    List(Vec<XmlValue>),
    /// An element's keyed content: child tag groups, `"$"` attributes,
    /// `"_"` mixed text.
    Mapping(XmlMap),
}

impl Default for XmlValue {
    /// The empty leaf, which serializes as a self-closing element.
    fn default() -> Self {
        XmlValue::Leaf(String::new())
    }
}

/// Structural classification of an [`XmlValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Leaf,
    List,
    Mapping,
}

impl XmlValue {
    /// Classifies this node by shape.
    ///
    /// Total over every constructible value; dispatching on the result is
    /// equivalent to matching the constructors directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canonxml::{Kind, XmlMap, XmlValue};
    ///
    /// assert_eq!(XmlValue::from("text").kind(), Kind::Leaf);
    /// assert_eq!(XmlValue::List(vec![]).kind(), Kind::List);
    /// assert_eq!(XmlValue::Mapping(XmlMap::new()).kind(), Kind::Mapping);
    /// ```
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            XmlValue::Leaf(_) => Kind::Leaf,
            XmlValue::List(_) => Kind::List,
            XmlValue::Mapping(_) => Kind::Mapping,
        }
    }

    /// Returns `true` if the value is a leaf.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, XmlValue::Leaf(_))
    }

    /// Returns `true` if the value is a list of repeated elements.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, XmlValue::List(_))
    }

    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, XmlValue::Mapping(_))
    }

    /// If the value is a leaf, returns its text. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmlValue::Leaf(text) => Some(text),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to its elements.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<XmlValue>> {
        match self {
            XmlValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a mapping, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&XmlMap> {
        match self {
            XmlValue::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for XmlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlValue::Leaf(text) => f.write_str(text),
            XmlValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(","))
            }
            XmlValue::Mapping(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                write!(f, "{{{}}}", keys.join(","))
            }
        }
    }
}

impl From<String> for XmlValue {
    fn from(text: String) -> Self {
        XmlValue::Leaf(text)
    }
}

impl From<&str> for XmlValue {
    fn from(text: &str) -> Self {
        XmlValue::Leaf(text.to_string())
    }
}

impl From<Vec<XmlValue>> for XmlValue {
    fn from(items: Vec<XmlValue>) -> Self {
        XmlValue::List(items)
    }
}

impl From<XmlMap> for XmlValue {
    fn from(map: XmlMap) -> Self {
        XmlValue::Mapping(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_constructor() {
        assert_eq!(XmlValue::Leaf(String::new()).kind(), Kind::Leaf);
        assert_eq!(XmlValue::List(vec![]).kind(), Kind::List);
        assert_eq!(XmlValue::Mapping(XmlMap::new()).kind(), Kind::Mapping);
    }

    #[test]
    fn accessors_reject_other_shapes() {
        let leaf = XmlValue::from("x");
        assert_eq!(leaf.as_str(), Some("x"));
        assert!(leaf.as_list().is_none());
        assert!(leaf.as_mapping().is_none());

        let list = XmlValue::List(vec![leaf.clone()]);
        assert!(list.as_str().is_none());
        assert_eq!(list.as_list().map(Vec::len), Some(1));
    }

    #[test]
    fn from_impls() {
        assert_eq!(XmlValue::from("a"), XmlValue::Leaf("a".to_string()));
        assert_eq!(
            XmlValue::from("a".to_string()),
            XmlValue::Leaf("a".to_string())
        );
        assert_eq!(XmlValue::from(Vec::new()), XmlValue::List(vec![]));
        assert_eq!(
            XmlValue::from(XmlMap::new()),
            XmlValue::Mapping(XmlMap::new())
        );
    }

    #[test]
    fn default_is_empty_leaf() {
        assert_eq!(XmlValue::default(), XmlValue::Leaf(String::new()));
    }

    #[test]
    fn display_renders_shapes() {
        let mut map = XmlMap::new();
        map.insert("a".to_string(), XmlValue::from("1"));
        map.insert("b".to_string(), XmlValue::from("2"));

        assert_eq!(XmlValue::from("text").to_string(), "text");
        assert_eq!(
            XmlValue::List(vec![XmlValue::from("x"), XmlValue::from("y")]).to_string(),
            "[x,y]"
        );
        assert_eq!(XmlValue::Mapping(map).to_string(), "{a,b}");
    }
}
