//! Canonical Form Specification
//!
//! This module documents the canonical form this library produces. It
//! contains no code.
//!
//! # Overview
//!
//! Metadata XML files (Salesforce profiles, permission sets, custom object
//! definitions and the like) are order-insensitive at the semantic level
//! but order-*sensitive* at the text level: retrieval tools emit elements
//! in arbitrary order, and every reordering shows up as diff noise in
//! version control. The canonical form fixes one deterministic rendering
//! per document so that semantically identical files are byte-identical.
//!
//! # Document model
//!
//! A parsed document is a tree of three shapes:
//!
//! | Shape | Meaning |
//! |-------|---------|
//! | Leaf | element text content (possibly empty) |
//! | List | repeated sibling elements under one tag name |
//! | Mapping | an element's keyed content: child tag groups, `$` attributes, `_` mixed text |
//!
//! Every child-element group is a list, even a single occurrence, so
//! repetition is uniform. Comments and processing instructions are not
//! preserved; namespaces pass through opaquely as ordinary attributes.
//!
//! # Canonicalization rules
//!
//! 1. **Key alphabetization.** Every mapping renders its keys in
//!    lexicographic order, unconditionally. This is independent of the
//!    sort-key table, which only influences *sibling* ordering.
//! 2. **Sibling ordering.** Each list is ordered by comparing element
//!    identity fingerprints as plain strings; ties keep their original
//!    relative order (the sort is stable).
//! 3. **Identity fingerprints.** The fingerprint of a node under field
//!    name `f` is:
//!    - leaf with text `t`: `f:t`
//!    - list: `f:` + element fingerprints (each under `f`) joined with `,`
//!    - mapping: `f:` + sub-key fingerprints joined with `|`, where the
//!      sub-keys are the sort-key table entry for `f` when one exists, in
//!      its declared order, and otherwise all of the node's own keys. A
//!      listed sub-key the node lacks contributes `key:`.
//!
//!    The `,` / `|` separator asymmetry is part of the format: changing
//!    either separator changes comparison results and therefore reorders
//!    existing canonical documents.
//! 4. **Exclusion.** A field named in the exclusion list is emitted with
//!    its entire subtree untouched — original sibling order *and* original
//!    key order. Exclusion is decided before anything else looks at the
//!    node. Use it for genuinely order-sensitive content such as picklist
//!    value lists.
//!
//! # Indentation
//!
//! Output indentation mirrors the source file. The first line with leading
//! whitespace decides: any space present selects a space unit of that
//! space count; an all-tab run selects a tab unit of the run length; a
//! document with no indented line gets four spaces. One unit per nesting
//! level, uniformly — mixed indentation is not supported.
//!
//! # Escaping
//!
//! The serialized text passes through one escaping stage:
//!
//! - `&` → `&amp;` and `'` → `&apos;`, everywhere.
//! - `<` and `>` are first escaped and then unconditionally un-escaped per
//!   line, so they come out *unescaped* — in markup, where that is
//!   required, and also in text content.
//! - `"` is never escaped.
//!
//! The asymmetry is deliberate and reproduced exactly; files formatted by
//! earlier releases depend on it.
//!
//! ## Known limitation
//!
//! The un-escape step is blind. Text content that was authored as the
//! literal five characters `&lt;` re-escapes to `&amp;lt;` correctly, but
//! a decoded `<` in text cannot be told apart from structural markup and
//! is emitted bare. Metadata files in practice contain neither, which is
//! why the trade-off holds.
//!
//! # Guarantees
//!
//! - **Determinism**: identical input text and rules produce identical
//!   output bytes, on every platform (plain string comparison, no locale,
//!   no hashing).
//! - **Idempotence**: formatting an already-formatted document is a
//!   no-op.
//! - **Failure safety**: malformed input produces an error and no output;
//!   the host leaves the document untouched.

// This module contains only documentation; no implementation code
