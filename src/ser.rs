//! XML serialization: an [`XmlValue`] tree back to document text.
//!
//! The serializer emits the XML declaration, then renders the tree with one
//! [`IndentUnit`] repetition per nesting level. Text and attribute values
//! are written **raw** — escaping is the final pipeline stage, handled by
//! [`crate::escape`] over the serialized text as a whole.
//!
//! ## Rendering rules
//!
//! - The document value must be a mapping with exactly one entry, the root
//!   element; any other shape is a [`Error::Structure`] defect, surfaced
//!   rather than guessed at.
//! - An empty leaf renders self-closing (`<tag/>`); a non-empty leaf
//!   renders on one line (`<tag>text</tag>`).
//! - A list renders one element per item at the same depth.
//! - A mapping renders its [`ATTRIBUTES_KEY`] entry inside the open tag
//!   (double-quoted), its [`TEXT_KEY`] entry as an indented text line, and
//!   every other entry as a child element, in map order. A mapping with no
//!   child elements collapses to a single line.
//!
//! ## Usage
//!
//! ```rust
//! use canonxml::{serialize, xml, IndentUnit};
//!
//! let doc = xml!({"root": {"a": ["1"]}});
//! let text = serialize(&doc, &IndentUnit::Spaces(2)).unwrap();
//! assert_eq!(
//!     text,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n  <a>1</a>\n</root>"
//! );
//! ```

use crate::value::{ATTRIBUTES_KEY, TEXT_KEY};
use crate::{Error, IndentUnit, Result, XmlMap, XmlValue};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Serializes a document tree with the given indentation unit.
///
/// The result carries no trailing newline; the escape pass appends one.
///
/// # Errors
///
/// Returns [`Error::Structure`] when the tree is not a well-formed
/// single-root document.
pub fn serialize(document: &XmlValue, indent: &IndentUnit) -> Result<String> {
    Serializer::new(indent).serialize(document)
}

/// The XML serializer.
///
/// Writes into a pre-allocated `String`; one instance serializes one
/// document.
pub struct Serializer {
    output: String,
    unit: String,
}

impl Serializer {
    #[must_use]
    pub fn new(indent: &IndentUnit) -> Self {
        Serializer {
            output: String::with_capacity(256),
            unit: indent.unit(),
        }
    }

    /// Consumes the serializer and produces the document text.
    pub fn serialize(mut self, document: &XmlValue) -> Result<String> {
        let map = document
            .as_mapping()
            .ok_or_else(|| Error::structure("document must be a mapping containing the root element"))?;
        let mut entries = map.iter();
        let (tag, root) = entries
            .next()
            .ok_or_else(|| Error::structure("document has no root element"))?;
        if entries.next().is_some() {
            return Err(Error::structure(
                "document must contain exactly one root element",
            ));
        }
        if root.is_list() {
            return Err(Error::structure("root element cannot be repeated"));
        }

        self.output.push_str(XML_DECLARATION);
        self.output.push('\n');
        self.write_element(tag, root, 0)?;
        if self.output.ends_with('\n') {
            self.output.pop();
        }
        Ok(self.output)
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(&self.unit);
        }
    }

    fn open_tag(&mut self, tag: &str, attributes: Option<&XmlMap>) -> Result<()> {
        self.output.push('<');
        self.output.push_str(tag);
        if let Some(attributes) = attributes {
            for (name, value) in attributes {
                let text = value.as_str().ok_or_else(|| {
                    Error::structure(format!("attribute `{name}` must be a text value"))
                })?;
                self.output.push(' ');
                self.output.push_str(name);
                self.output.push_str("=\"");
                self.output.push_str(text);
                self.output.push('"');
            }
        }
        Ok(())
    }

    fn close_tag(&mut self, tag: &str) {
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
        self.output.push('\n');
    }

    fn write_element(&mut self, tag: &str, value: &XmlValue, level: usize) -> Result<()> {
        match value {
            XmlValue::Leaf(text) => {
                self.write_indent(level);
                if text.is_empty() {
                    self.output.push('<');
                    self.output.push_str(tag);
                    self.output.push_str("/>");
                } else {
                    self.output.push('<');
                    self.output.push_str(tag);
                    self.output.push('>');
                    self.output.push_str(text);
                    self.close_tag_inline(tag);
                }
                self.output.push('\n');
            }
            XmlValue::List(items) => {
                for item in items {
                    self.write_element(tag, item, level)?;
                }
            }
            XmlValue::Mapping(map) => {
                let attributes = match map.get(ATTRIBUTES_KEY) {
                    Some(value) => Some(value.as_mapping().ok_or_else(|| {
                        Error::structure("attribute entry must be a mapping of text values")
                    })?),
                    None => None,
                };
                let text = match map.get(TEXT_KEY) {
                    Some(value) => Some(value.as_str().ok_or_else(|| {
                        Error::structure("text entry must be a text value")
                    })?),
                    None => None,
                };
                let children: Vec<(&String, &XmlValue)> = map
                    .iter()
                    .filter(|(key, _)| key.as_str() != ATTRIBUTES_KEY && key.as_str() != TEXT_KEY)
                    .collect();

                self.write_indent(level);
                self.open_tag(tag, attributes)?;
                if children.is_empty() {
                    match text {
                        Some(text) if !text.is_empty() => {
                            self.output.push('>');
                            self.output.push_str(text);
                            self.close_tag_inline(tag);
                        }
                        _ => self.output.push_str("/>"),
                    }
                    self.output.push('\n');
                } else {
                    self.output.push('>');
                    self.output.push('\n');
                    if let Some(text) = text {
                        if !text.is_empty() {
                            self.write_indent(level + 1);
                            self.output.push_str(text);
                            self.output.push('\n');
                        }
                    }
                    for (child_tag, child) in children {
                        self.write_element(child_tag, child, level + 1)?;
                    }
                    self.write_indent(level);
                    self.close_tag(tag);
                }
            }
        }
        Ok(())
    }

    fn close_tag_inline(&mut self, tag: &str) {
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    fn spaces2() -> IndentUnit {
        IndentUnit::Spaces(2)
    }

    #[test]
    fn leaf_and_empty_leaf_rendering() {
        let doc = xml!({"root": {"name": ["Admin"], "empty": [""]}});
        let text = serialize(&doc, &spaces2()).unwrap();
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root>\n  <name>Admin</name>\n  <empty/>\n</root>"
        );
    }

    #[test]
    fn list_renders_one_element_per_item() {
        let doc = xml!({"root": {"item": ["a", "b"]}});
        let text = serialize(&doc, &spaces2()).unwrap();
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root>\n  <item>a</item>\n  <item>b</item>\n</root>"
        );
    }

    #[test]
    fn attributes_render_in_open_tag() {
        let doc = xml!({"root": {
            "$": {"xmlns": "urn:x"},
            "item": [{"$": {"id": "7"}, "_": "v"}],
        }});
        let text = serialize(&doc, &spaces2()).unwrap();
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root xmlns=\"urn:x\">\n  <item id=\"7\">v</item>\n</root>"
        );
    }

    #[test]
    fn nested_mappings_indent_per_level() {
        let doc = xml!({"a": {"b": [{"c": ["x"]}]}});
        let text = serialize(&doc, &IndentUnit::Tabs(1)).unwrap();
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <a>\n\t<b>\n\t\t<c>x</c>\n\t</b>\n</a>"
        );
    }

    #[test]
    fn mixed_text_renders_before_children() {
        let doc = xml!({"root": {"_": "hello", "a": ["1"]}});
        let text = serialize(&doc, &spaces2()).unwrap();
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root>\n  hello\n  <a>1</a>\n</root>"
        );
    }

    #[test]
    fn empty_mapping_self_closes() {
        let doc = xml!({"root": {"group": [{}]}});
        let text = serialize(&doc, &spaces2()).unwrap();
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root>\n  <group/>\n</root>"
        );
    }

    #[test]
    fn text_is_written_raw() {
        // Escaping belongs to the escape pass, not the serializer.
        let doc = xml!({"root": {"t": ["a & b"]}});
        let text = serialize(&doc, &spaces2()).unwrap();
        assert!(text.contains("<t>a & b</t>"));
    }

    #[test]
    fn rejects_non_mapping_document() {
        let err = serialize(&xml!("just text"), &spaces2()).unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }

    #[test]
    fn rejects_multiple_roots() {
        let doc = xml!({"a": {"x": ["1"]}, "b": {"y": ["2"]}});
        let err = serialize(&doc, &spaces2()).unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }

    #[test]
    fn rejects_repeated_root() {
        let doc = xml!({"a": ["1", "2"]});
        let err = serialize(&doc, &spaces2()).unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }

    #[test]
    fn rejects_non_leaf_attribute() {
        let doc = xml!({"root": {"$": {"bad": ["1"]}, "a": ["x"]}});
        let err = serialize(&doc, &spaces2()).unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }
}
