use std::path::PathBuf;

use clap::ValueEnum;
use sigdoc_config::AiModel;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Model choice as accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModelArg {
    Gpt3,
    Gpt4,
    Claude,
}

impl From<ModelArg> for AiModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Gpt3 => Self::Gpt3,
            ModelArg::Gpt4 => Self::Gpt4,
            ModelArg::Claude => Self::Claude,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}
