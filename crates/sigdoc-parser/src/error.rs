//! Parser error types for sigdoc-parser.

use std::path::PathBuf;

/// Errors that abort extraction for a file.
///
/// A declaration name that matches nothing is not an error: extraction
/// returns an empty sequence instead.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {language} at line {line}, column {column}: {message}")]
    ParseFailed {
        language: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParserError {
    /// Returns `true` for structural parse failures.
    #[must_use]
    pub const fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailed { .. })
    }
}
