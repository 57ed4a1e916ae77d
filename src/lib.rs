//! # canonxml
//!
//! Deterministic canonicalization and formatting for metadata XML files.
//!
//! ## What problem does this solve?
//!
//! Metadata retrieval tools (Salesforce deployments being the archetype)
//! emit XML whose element order is semantically irrelevant but textually
//! unstable: two retrievals of the same configuration can differ on every
//! line, drowning version control in noise. `canonxml` rewrites such a
//! document into a byte-stable canonical form:
//!
//! - mapping keys alphabetized,
//! - repeated sibling elements ordered by a derived identity fingerprint,
//! - indentation normalized to the style the source file already uses,
//! - XML-sensitive characters escaped consistently.
//!
//! ## Quick Start
//!
//! ```rust
//! let xml = "<root>\n  <b>2</b>\n  <a>1</a>\n</root>";
//! let formatted = canonxml::format(xml).unwrap();
//! assert_eq!(
//!     formatted,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n  <a>1</a>\n  <b>2</b>\n</root>\n"
//! );
//! ```
//!
//! ## Custom ordering rules
//!
//! Some repeated elements have a natural identity field that should decide
//! their order regardless of the rest of their content, and some content is
//! genuinely order-sensitive and must not be touched. Both are expressed
//! through [`FormatOptions`]:
//!
//! ```rust
//! use canonxml::{format_with_options, FormatOptions};
//!
//! let xml = "<Profile>\n  <fieldPermissions>\n    <field>B__c</field>\n    \
//!            <editable>true</editable>\n  </fieldPermissions>\n  \
//!            <fieldPermissions>\n    <editable>false</editable>\n    \
//!            <field>A__c</field>\n  </fieldPermissions>\n</Profile>";
//!
//! let options = FormatOptions::new()
//!     .with_mapped_key("fieldPermissions", ["field"])
//!     .with_unmapped_key("loginIpRanges");
//! let formatted = format_with_options(xml, &options).unwrap();
//!
//! // Ordered by <field> alone; <editable> plays no part.
//! assert!(formatted.find("A__c").unwrap() < formatted.find("B__c").unwrap());
//! ```
//!
//! [`FormatOptions::salesforce`] ships a ready-made rule set for Salesforce
//! metadata, and the whole struct deserializes from the `mappedKeys` /
//! `unmappedKeys` configuration value host editors already carry.
//!
//! ## Pipeline
//!
//! `format` is a fixed five-stage pipeline over an in-memory tree:
//!
//! ```text
//! text --parse--> XmlValue --canonicalize--> XmlValue --serialize--> text --escape--> text
//!                           (indent unit inferred from the source text)
//! ```
//!
//! Each stage is exposed individually ([`parse()`], [`canonicalize()`],
//! [`serialize()`], [`escape()`], [`IndentUnit::infer`]) for callers that
//! need to inspect or rebuild trees; see the [`spec`] module for the
//! precise canonical-form rules.
//!
//! ## Guarantees
//!
//! - **Deterministic**: identical input and rules give identical bytes,
//!   across runs and platforms.
//! - **Idempotent**: formatting already-formatted output is a no-op.
//! - **Failure-safe**: malformed input returns an error and produces no
//!   output, so the caller can leave the original document untouched.
//! - **Pure**: no shared mutable state, no I/O, no unsafe code; the only
//!   boundary call is the parse step.

pub mod canon;
pub mod error;
pub mod escape;
pub mod macros;
pub mod map;
pub mod options;
pub mod parse;
pub mod ser;
pub mod spec;
pub mod value;

pub use canon::{canonicalize, fingerprint};
pub use error::{Error, Result};
pub use escape::escape;
pub use map::XmlMap;
pub use options::{FormatOptions, IndentUnit, SortKeyTable};
pub use parse::parse;
pub use ser::{serialize, Serializer};
pub use value::{Kind, XmlValue, ATTRIBUTES_KEY, TEXT_KEY};

/// Formats a document with empty rules: alphabetized keys, full structural
/// fingerprints for every repeated group, nothing excluded.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input is not well-formed XML. The
/// caller should surface the message and keep the document unmodified.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(xml: &str) -> Result<String> {
    format_with_options(xml, &FormatOptions::default())
}

/// Formats a document with the given canonicalization rules.
///
/// Produces the full replacement text: UTF-8, prefixed with an XML
/// declaration, terminated by a newline, indented with the unit inferred
/// from the source text.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed input. [`Error::Structure`]
/// signals a tree the serializer cannot emit and is reached through
/// hand-built trees fed directly to [`serialize()`] rather than through
/// this function.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_with_options(xml: &str, options: &FormatOptions) -> Result<String> {
    let tree = parse::parse(xml)?;
    let indent = IndentUnit::infer(xml);
    let canonical = canon::canonicalize(&tree, options);
    let serialized = ser::serialize(&canonical, &indent)?;
    Ok(escape::escape(&serialized))
}
