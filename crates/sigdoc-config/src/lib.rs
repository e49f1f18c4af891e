//! # sigdoc-config
//!
//! Layered configuration loading for sigdoc using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SIGDOC_*` prefix, `__` as separator)
//! 2. The raw `OPENAI_API_KEY` and `CLAUDE_API_KEY` variables
//! 3. An explicit file passed to [`SigdocConfig::load_with_file`]
//! 4. Project-level `.sigdoc/config.toml`
//! 5. User-level `~/.config/sigdoc/config.toml`
//! 6. Built-in defaults
//!
//! Figment maps `SIGDOC_RENDER__MODEL` -> `render.model`,
//! `SIGDOC_OPENAI__API_KEY` -> `openai.api_key`, etc.
//!
//! `.env` loading is left to the binary so library callers and tests see
//! only the process environment.

mod error;
mod providers;
mod render;

pub use error::ConfigError;
pub use providers::{AnthropicConfig, OpenAiConfig};
pub use render::{AiModel, RenderConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SigdocConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
}

impl SigdocConfig {
    /// Load configuration from all default sources.
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with an extra TOML file layered above the
    /// project and user files.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist and
    /// [`ConfigError::Figment`] on parse failures.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Self::figment_with(Some(path))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the default figment provider chain.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sigdoc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Self::env_providers())
    }

    /// Environment providers: bare provider keys first, `SIGDOC_*` on top.
    fn env_providers() -> Figment {
        Figment::new()
            .merge(
                Env::raw()
                    .only(&["OPENAI_API_KEY"])
                    .map(|_| "openai.api_key".into()),
            )
            .merge(
                Env::raw()
                    .only(&["CLAUDE_API_KEY"])
                    .map(|_| "anthropic.api_key".into()),
            )
            .merge(Env::prefixed("SIGDOC_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sigdoc").join("config.toml"))
    }

    /// Credentials check for the configured model's provider.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingApiKey`] naming the provider section.
    pub fn ensure_provider(&self, model: AiModel) -> Result<(), ConfigError> {
        let (configured, section) = if model.is_anthropic() {
            (self.anthropic.is_configured(), "anthropic")
        } else {
            (self.openai.is_configured(), "openai")
        };
        if configured {
            Ok(())
        } else {
            Err(ConfigError::MissingApiKey {
                section: section.into(),
            })
        }
    }
}
