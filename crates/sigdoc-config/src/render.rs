//! Documentation rendering configuration.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default directory that receives one markdown file per declaration.
fn default_output_dir() -> PathBuf {
    PathBuf::from("./docs/wowapi/classes")
}

/// Default completion length cap.
const fn default_max_tokens() -> u32 {
    2000
}

/// Default HTTP timeout for a single completion request.
const fn default_timeout_secs() -> u64 {
    120
}

/// Model used to write documentation for each method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AiModel {
    #[default]
    Gpt3,
    Gpt4,
    Claude,
}

impl AiModel {
    /// Provider-side model identifier.
    #[must_use]
    pub const fn model_id(self) -> &'static str {
        match self {
            Self::Gpt3 => "gpt-3.5-turbo",
            Self::Gpt4 => "gpt-4-turbo-preview",
            Self::Claude => "claude-3-opus-20240229",
        }
    }

    /// Whether the model is served by the Anthropic API.
    #[must_use]
    pub const fn is_anthropic(self) -> bool {
        matches!(self, Self::Claude)
    }
}

impl std::fmt::Display for AiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Gpt3 => "gpt3",
            Self::Gpt4 => "gpt4",
            Self::Claude => "claude",
        };
        write!(f, "{s}")
    }
}

impl FromStr for AiModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gpt3" => Ok(Self::Gpt3),
            "gpt4" => Ok(Self::Gpt4),
            "claude" => Ok(Self::Claude),
            other => Err(ConfigError::UnknownModel {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub model: AiModel,

    /// Directory for generated `{Declaration}.md` files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Few-shot example prepended to every prompt.
    #[serde(default)]
    pub example_path: Option<PathBuf>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            model: AiModel::default(),
            output_dir: default_output_dir(),
            example_path: None,
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
