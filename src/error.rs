//! Typed error types for par-case.
//!
//! Callers of the library can match on [`ConvertError`] instead of relying on
//! opaque `anyhow` strings; the binary wraps it with context at the edge.

use thiserror::Error;

/// Errors produced by the conversion pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The word has no delimiter and does not start with a cased letter.
    #[error("Unsupported format")]
    UnsupportedFormat {
        /// The word that could not be classified.
        word: String,
    },
}
