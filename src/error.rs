//! Error types for XML canonicalization.
//!
//! All failures are surfaced synchronously to the caller; the host editor is
//! expected to display the message and leave the document untouched. There
//! are no retries anywhere in the pipeline — formatting is a single-shot,
//! deterministic operation.
//!
//! ## Error Categories
//!
//! - **Parse errors**: the input text is not well-formed XML. Includes the
//!   line and column reported by the parser.
//! - **Structure errors**: a tree handed to the serializer has a shape that
//!   cannot be emitted as an XML document (e.g. more than one root element).
//!   These indicate a defect in the caller's tree construction and are never
//!   guessed at.
//!
//! A configuration lookup miss (a field name absent from the sort-key table)
//! is *not* an error; the canonicalizer falls back to fingerprinting over
//! all of the node's own keys.
//!
//! ## Examples
//!
//! ```rust
//! use canonxml::{format, Error};
//!
//! let result = format("<unclosed>");
//! assert!(matches!(result, Err(Error::Parse { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while formatting a document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Input text is not well-formed XML.
    ///
    /// `line` and `col` are 1-based and point at the offending token.
    #[error("malformed XML: {msg}")]
    Parse {
        line: usize,
        col: usize,
        msg: String,
    },

    /// A tree shape the serializer cannot emit as an XML document.
    #[error("invalid document structure: {0}")]
    Structure(String),

    /// Custom error with a display message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canonxml::Error;
    ///
    /// let err = Error::parse(3, 7, "unexpected end of stream");
    /// assert!(err.to_string().contains("unexpected end of stream"));
    /// ```
    pub fn parse(line: usize, col: usize, msg: &str) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a structure error for trees that cannot be serialized.
    pub fn structure<T: fmt::Display>(msg: T) -> Self {
        Error::Structure(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        Error::Parse {
            line: pos.row as usize,
            col: pos.col as usize,
            msg: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
