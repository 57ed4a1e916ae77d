//! Entity escaping applied after serialization.
//!
//! The serializer writes element text and attribute values raw; this module
//! is the single place escaping happens, as the last stage of the pipeline.
//!
//! The pass has two steps:
//!
//! 1. Global, independent substitutions over the whole serialized text:
//!    `&` → `&amp;`, `<` → `&lt;`, `>` → `&gt;`, `'` → `&apos;`. The quote
//!    character `"` is intentionally left alone — attributes are emitted
//!    with double quotes and metadata text has no use for `&quot;`.
//! 2. Per line, an unconditional undo of `&lt;` → `<` and `&gt;` → `>`,
//!    which restores the structural markup the first step clobbered.
//!
//! The net effect is asymmetric on purpose: `&` and `'` come out escaped,
//! while `<` and `>` come out unescaped everywhere, including in text
//! content. This reproduces the established output format exactly;
//! consumers of previously formatted files depend on it. The undo step is
//! blind — it cannot tell a user-authored literal `&lt;` in text content
//! apart from markup, which is an accepted limitation of the format (see
//! [`crate::spec`]).

/// Escapes a serialized document.
///
/// Every processed line is emitted with a trailing newline, so the result
/// always ends in `\n`.
///
/// # Examples
///
/// ```rust
/// use canonxml::escape;
///
/// assert_eq!(escape("<a>x &amp; y</a>"), "<a>x &amp;amp; y</a>\n");
/// assert_eq!(escape("<a>1 < 2</a>"), "<a>1 < 2</a>\n");
/// assert_eq!(escape("<a>it's</a>"), "<a>it&apos;s</a>\n");
/// ```
///
/// (The first example shows why the serializer must hand this function
/// *raw* text: pre-escaped input gets escaped again.)
#[must_use]
pub fn escape(serialized: &str) -> String {
    let escaped = serialized
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;");

    let mut output = String::with_capacity(escaped.len());
    for line in escaped.split('\n') {
        let line = line.replace("&lt;", "<").replace("&gt;", ">");
        output.push_str(&line);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ampersand_is_escaped() {
        assert_eq!(escape("<a>Fish & Chips</a>"), "<a>Fish &amp; Chips</a>\n");
    }

    #[test]
    fn apostrophe_is_escaped() {
        assert_eq!(escape("<a>O'Brien</a>"), "<a>O&apos;Brien</a>\n");
    }

    #[test]
    fn quote_is_untouched() {
        assert_eq!(
            escape("<a name=\"v\">x</a>"),
            "<a name=\"v\">x</a>\n"
        );
    }

    #[test]
    fn angle_brackets_survive_unescaped() {
        // Text content with literal < and > comes out unescaped: the undo
        // step cannot distinguish it from markup.
        assert_eq!(escape("<a>1 < 2 > 0</a>"), "<a>1 < 2 > 0</a>\n");
    }

    #[test]
    fn structural_markup_is_preserved() {
        let doc = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n  <child/>\n</root>";
        assert_eq!(
            escape(doc),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n  <child/>\n</root>\n"
        );
    }

    #[test]
    fn authored_entity_text_gets_reescaped() {
        // Raw text "&lt;" (an ampersand followed by "lt;") escapes to
        // "&amp;lt;", which the undo step leaves alone.
        assert_eq!(escape("<a>&lt;</a>"), "<a>&amp;lt;</a>\n");
    }

    #[test]
    fn output_always_ends_with_newline() {
        assert_eq!(escape(""), "\n");
        assert_eq!(escape("x"), "x\n");
        assert_eq!(escape("x\ny"), "x\ny\n");
    }
}
