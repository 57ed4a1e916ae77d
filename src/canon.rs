//! The canonicalization core: key alphabetization, identity fingerprints,
//! and fingerprint-ordered repeated groups.
//!
//! [`canonicalize`] rewrites a parsed tree into its canonical shape:
//!
//! - mapping keys are sorted lexicographically, always;
//! - repeated siblings (lists) are ordered by their identity fingerprint,
//!   with the sort-key override table deciding which descendant fields the
//!   fingerprint covers;
//! - fields on the exclusion list are returned untouched, subtree and all.
//!
//! The transformation is pure: it never mutates its input and always
//! returns a fresh tree (or a copy of an unmodified leaf). Running it twice
//! yields the same tree as running it once.
//!
//! [`fingerprint`] is exposed for debugging orderings; the string it
//! produces is a comparison key only and is never persisted. Its exact
//! layout — `,` between list element fingerprints, `|` between mapping
//! sub-key fingerprints — is a compatibility contract: changing either
//! separator reorders previously canonicalized documents.

use crate::options::SortKeyTable;
use crate::{FormatOptions, XmlMap, XmlValue};

/// Canonicalizes a parsed document tree.
///
/// The document root is processed under the empty field context `""`,
/// which never collides with a real tag name, so exclusion and override
/// lookups at the root are well-defined no-ops.
///
/// # Examples
///
/// ```rust
/// use canonxml::{canonicalize, xml, FormatOptions};
///
/// let tree = xml!({"b": "1", "a": "2"});
/// let canonical = canonicalize(&tree, &FormatOptions::new());
///
/// let keys: Vec<_> = canonical.as_mapping().unwrap().keys().cloned().collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
#[must_use]
pub fn canonicalize(value: &XmlValue, options: &FormatOptions) -> XmlValue {
    canonicalize_under("", value, options)
}

fn canonicalize_under(field: &str, value: &XmlValue, options: &FormatOptions) -> XmlValue {
    // Exclusion is checked before type dispatch: an excluded field keeps
    // its entire subtree, original order and key casing included.
    if options.unmapped_keys.iter().any(|k| k == field) {
        return value.clone();
    }

    match value {
        XmlValue::Leaf(_) => value.clone(),
        XmlValue::List(items) => {
            let mut canonical: Vec<XmlValue> = items
                .iter()
                .map(|item| canonicalize_under(field, item, options))
                .collect();
            // Stable sort: elements with equal fingerprints keep their
            // original relative order.
            canonical.sort_by_cached_key(|item| fingerprint(field, item, &options.mapped_keys));
            XmlValue::List(canonical)
        }
        XmlValue::Mapping(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut canonical = XmlMap::with_capacity(map.len());
            for key in keys {
                if let Some(child) = map.get(key) {
                    canonical.insert(key.clone(), canonicalize_under(key, child, options));
                }
            }
            XmlValue::Mapping(canonical)
        }
    }
}

/// Computes the identity fingerprint of `value` under the field name
/// `field`.
///
/// - Leaf: `field:text`.
/// - List: `field:` followed by the element fingerprints joined with `,`;
///   elements are fingerprinted under the same field name, since they are
///   repeated instances of that field.
/// - Mapping: `field:` followed by sub-key fingerprints joined with `|`.
///   The sub-keys come from the override table entry for `field` when one
///   exists (in its declared order), otherwise from all of the mapping's
///   own keys in natural order. A listed key the node lacks contributes an
///   empty-leaf fingerprint (`key:`).
///
/// Pure string concatenation — identical input and table produce a
/// byte-identical fingerprint on every run and platform.
///
/// # Examples
///
/// ```rust
/// use canonxml::{fingerprint, xml, SortKeyTable};
///
/// let table = SortKeyTable::new();
/// assert_eq!(fingerprint("item", &xml!({"name": "a"}), &table), "item:name:a");
/// assert_eq!(
///     fingerprint("tags", &xml!(["x", "y"]), &table),
///     "tags:tags:x,tags:y"
/// );
/// ```
#[must_use]
pub fn fingerprint(field: &str, value: &XmlValue, table: &SortKeyTable) -> String {
    match value {
        XmlValue::Leaf(text) => format!("{field}:{text}"),
        XmlValue::List(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| fingerprint(field, item, table))
                .collect();
            format!("{field}:{}", parts.join(","))
        }
        XmlValue::Mapping(map) => {
            let parts: Vec<String> = match table.get(field) {
                Some(sort_keys) => sort_keys
                    .iter()
                    .map(|key| match map.get(key) {
                        Some(child) => fingerprint(key, child, table),
                        None => format!("{key}:"),
                    })
                    .collect(),
                None => map
                    .iter()
                    .map(|(key, child)| fingerprint(key, child, table))
                    .collect(),
            };
            format!("{field}:{}", parts.join("|"))
        }
    }
}
