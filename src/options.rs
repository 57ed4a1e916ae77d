//! Configuration for canonicalization and output formatting.
//!
//! This module provides:
//!
//! - [`FormatOptions`]: the sort-key override table and the exclusion list,
//!   passed explicitly into every entry point (no process-wide state).
//! - [`IndentUnit`]: the space/tab run used for one nesting level of output,
//!   inferred once per document from the source text.
//!
//! `FormatOptions` deserializes from the host editor's configuration value
//! under its wire names `mappedKeys` and `unmappedKeys`:
//!
//! ```rust
//! use canonxml::FormatOptions;
//!
//! let options: FormatOptions = serde_json::from_str(
//!     r#"{"mappedKeys": {"fields": ["fullName"]}, "unmappedKeys": ["values"]}"#,
//! )
//! .unwrap();
//! assert_eq!(options.mapped_keys["fields"], vec!["fullName"]);
//! assert_eq!(options.unmapped_keys, vec!["values"]);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The sort-key override table: field name → the descendant field names
/// that define that field's repeated-sibling identity, in significance
/// order.
///
/// A field absent from the table falls back to fingerprinting over all of
/// the node's own keys.
pub type SortKeyTable = IndexMap<String, Vec<String>>;

/// Canonicalization rules for one formatting invocation.
///
/// Immutable for the duration of the call; the canonicalizer only reads it.
///
/// # Examples
///
/// ```rust
/// use canonxml::FormatOptions;
///
/// let options = FormatOptions::new()
///     .with_mapped_key("fieldPermissions", ["field"])
///     .with_unmapped_key("loginIpRanges");
///
/// assert!(options.mapped_keys.contains_key("fieldPermissions"));
/// assert_eq!(options.unmapped_keys, vec!["loginIpRanges"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Field name → sort-key fields for repeated-sibling ordering.
    pub mapped_keys: SortKeyTable,
    /// Field names whose entire subtree is exempt from canonicalization;
    /// original child order and key order are preserved byte-for-byte.
    pub unmapped_keys: Vec<String>,
}

impl FormatOptions {
    /// Creates empty options: every repeated group is ordered by its full
    /// structural fingerprint and nothing is excluded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a sort-key override for `field`.
    #[must_use]
    pub fn with_mapped_key<K, I, S>(mut self, field: K, sort_keys: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mapped_keys
            .insert(field.into(), sort_keys.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a field name to the exclusion list.
    #[must_use]
    pub fn with_unmapped_key<K: Into<String>>(mut self, field: K) -> Self {
        self.unmapped_keys.push(field.into());
        self
    }

    /// Rules for Salesforce metadata files.
    ///
    /// Covers the common repeated elements of Profile, PermissionSet and
    /// CustomObject metadata with their natural identity fields, and
    /// excludes the groups whose order is genuinely significant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canonxml::FormatOptions;
    ///
    /// let options = FormatOptions::salesforce();
    /// assert_eq!(options.mapped_keys["fieldPermissions"], vec!["field"]);
    /// assert!(options.unmapped_keys.contains(&"loginIpRanges".to_string()));
    /// ```
    #[must_use]
    pub fn salesforce() -> Self {
        Self::new()
            .with_mapped_key("applicationVisibilities", ["application"])
            .with_mapped_key("classAccesses", ["apexClass"])
            .with_mapped_key("customMetadataTypeAccesses", ["name"])
            .with_mapped_key("customPermissions", ["name"])
            .with_mapped_key("customSettingAccesses", ["name"])
            .with_mapped_key("fieldPermissions", ["field"])
            .with_mapped_key("flowAccesses", ["flow"])
            .with_mapped_key("layoutAssignments", ["layout", "recordType"])
            .with_mapped_key("objectPermissions", ["object"])
            .with_mapped_key("pageAccesses", ["apexPage"])
            .with_mapped_key("recordTypeVisibilities", ["recordType"])
            .with_mapped_key("tabVisibilities", ["tab"])
            .with_mapped_key("userPermissions", ["name"])
            .with_unmapped_key("loginHours")
            .with_unmapped_key("loginIpRanges")
            .with_unmapped_key("values")
    }
}

/// The whitespace run applied per nesting level of serialized output.
///
/// Inferred once per document; the whole output uses one unit (mixed
/// indentation is not supported).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndentUnit {
    /// `n` space characters per level.
    Spaces(usize),
    /// `n` tab characters per level.
    Tabs(usize),
}

impl Default for IndentUnit {
    fn default() -> Self {
        IndentUnit::Spaces(4)
    }
}

impl IndentUnit {
    /// Infers the indentation unit from the original document text.
    ///
    /// Scans lines top to bottom, skipping blank lines, and stops at the
    /// first line with leading whitespace. Any space in the leading run
    /// selects a space unit of that count (tabs in a mixed run are
    /// ignored); an all-tab run selects a tab unit of the run's length.
    /// A document with no indented line defaults to four spaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canonxml::IndentUnit;
    ///
    /// assert_eq!(IndentUnit::infer("<a>\n  <b/>\n</a>"), IndentUnit::Spaces(2));
    /// assert_eq!(IndentUnit::infer("<a>\n\t<b/>\n</a>"), IndentUnit::Tabs(1));
    /// assert_eq!(IndentUnit::infer("<a/>"), IndentUnit::Spaces(4));
    /// ```
    #[must_use]
    pub fn infer(text: &str) -> Self {
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let leading: Vec<char> = line.chars().take_while(|c| c.is_whitespace()).collect();
            if leading.is_empty() {
                continue;
            }
            let spaces = leading.iter().filter(|c| **c == ' ').count();
            if spaces > 0 {
                return IndentUnit::Spaces(spaces);
            }
            return IndentUnit::Tabs(leading.len());
        }
        IndentUnit::Spaces(4)
    }

    /// Returns the unit as a string: the run for one nesting level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canonxml::IndentUnit;
    ///
    /// assert_eq!(IndentUnit::Spaces(2).unit(), "  ");
    /// assert_eq!(IndentUnit::Tabs(1).unit(), "\t");
    /// ```
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            IndentUnit::Spaces(n) => " ".repeat(*n),
            IndentUnit::Tabs(n) => "\t".repeat(*n),
        }
    }
}

impl fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unit())
    }
}
