//! Render error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or writing documentation.
#[derive(Debug, Error)]
pub enum RenderError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider answered without any text content.
    #[error("empty completion from {model}")]
    EmptyCompletion { model: String },

    /// Provider credentials or other settings are missing.
    #[error(transparent)]
    Config(#[from] sigdoc_config::ConfigError),

    /// Reading the example or writing a markdown file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
