//! XML parsing: document text to an [`XmlValue`] tree.
//!
//! Parsing is the pipeline's only boundary call; a failure here is terminal
//! for the invocation and is reported to the caller unchanged — the
//! document is never half-formatted.
//!
//! ## Tree shape
//!
//! The parser produces the grouped-children object shape the rest of the
//! pipeline operates on:
//!
//! - The document is a mapping with a single entry: root tag → root value.
//! - An element with neither attributes nor element children is a
//!   [`XmlValue::Leaf`] holding its (entity-decoded, trimmed) text; an
//!   empty element is the empty leaf.
//! - Child elements are grouped by tag name in first-appearance order, and
//!   every group is a [`XmlValue::List`] — even a single occurrence — so
//!   repetition is uniform for the canonicalizer.
//! - Attributes live under the reserved [`ATTRIBUTES_KEY`] entry as a
//!   mapping of leaves. Namespace declarations (`xmlns`, `xmlns:p`) pass
//!   through as ordinary attributes; prefixed tag and attribute names keep
//!   their prefixes.
//! - Non-whitespace text alongside attributes or children lands under the
//!   reserved [`TEXT_KEY`] entry; whitespace-only inter-element text is
//!   dropped.
//!
//! Comments and processing instructions are not preserved.

use crate::value::{ATTRIBUTES_KEY, TEXT_KEY};
use crate::{Result, XmlMap, XmlValue};
use roxmltree::{Attribute, Document, Node};

/// Parses XML text into a document tree.
///
/// # Examples
///
/// ```rust
/// use canonxml::parse;
///
/// let tree = parse("<root><item>a</item><item>b</item></root>").unwrap();
/// let root = tree.as_mapping().unwrap().get("root").unwrap();
/// let items = root.as_mapping().unwrap().get("item").unwrap();
/// assert_eq!(items.as_list().map(Vec::len), Some(2));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) when the text is not
/// well-formed XML.
pub fn parse(xml: &str) -> Result<XmlValue> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    let mut document = XmlMap::with_capacity(1);
    document.insert(qualified_name(root), element_value(root));
    Ok(XmlValue::Mapping(document))
}

fn element_value(node: Node) -> XmlValue {
    let attributes = attribute_map(node);

    let mut text = String::new();
    let mut groups: Vec<(String, Vec<XmlValue>)> = Vec::new();
    for child in node.children() {
        if child.is_element() {
            let tag = qualified_name(child);
            let value = element_value(child);
            match groups.iter_mut().find(|(existing, _)| *existing == tag) {
                Some((_, items)) => items.push(value),
                None => groups.push((tag, vec![value])),
            }
        } else if child.is_text() {
            if let Some(piece) = child.text() {
                text.push_str(piece);
            }
        }
    }
    let text = text.trim();

    if attributes.is_empty() && groups.is_empty() {
        return XmlValue::Leaf(text.to_string());
    }

    let mut map = XmlMap::new();
    if !attributes.is_empty() {
        map.insert(ATTRIBUTES_KEY.to_string(), XmlValue::Mapping(attributes));
    }
    if !text.is_empty() {
        map.insert(TEXT_KEY.to_string(), XmlValue::Leaf(text.to_string()));
    }
    for (tag, items) in groups {
        map.insert(tag, XmlValue::List(items));
    }
    XmlValue::Mapping(map)
}

fn attribute_map(node: Node) -> XmlMap {
    let mut map = XmlMap::new();
    for (prefix, uri) in declared_namespaces(node) {
        let key = match prefix {
            Some(p) => format!("xmlns:{p}"),
            None => "xmlns".to_string(),
        };
        map.insert(key, XmlValue::Leaf(uri));
    }
    for attr in node.attributes() {
        map.insert(
            attribute_name(node, &attr),
            XmlValue::Leaf(attr.value().to_string()),
        );
    }
    map
}

/// Namespaces declared on this element, as opposed to inherited from an
/// ancestor: the in-scope set minus the parent's in-scope set.
fn declared_namespaces(node: Node) -> Vec<(Option<String>, String)> {
    let in_scope = |n: Node| -> Vec<(Option<String>, String)> {
        n.namespaces()
            .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
            .collect()
    };
    let inherited = node.parent().map(in_scope).unwrap_or_default();
    in_scope(node)
        .into_iter()
        .filter(|(prefix, _)| prefix.as_deref() != Some("xml"))
        .filter(|declared| !inherited.contains(declared))
        .collect()
}

fn qualified_name(node: Node) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", tag.name()),
        _ => tag.name().to_string(),
    }
}

fn attribute_name(node: Node, attr: &Attribute) -> String {
    match attr.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", attr.name()),
        _ => attr.name().to_string(),
    }
}
