//! Errors raised while loading or checking sigdoc settings.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment value could not be merged or typed.
    #[error("failed to load sigdoc configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The provider serving the selected model has no API key.
    #[error("no API key for [{section}]; set {section}.api_key or its environment variable")]
    MissingApiKey { section: String },

    /// A config file passed explicitly does not exist.
    #[error("config file {} does not exist", path.display())]
    MissingFile { path: PathBuf },

    /// `render.model` names a model sigdoc does not know.
    #[error("unknown model '{value}' for render.model (expected gpt3, gpt4 or claude)")]
    UnknownModel { value: String },
}
