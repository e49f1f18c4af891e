use std::path::PathBuf;

use clap::{Args, Subcommand};
use sigdoc_parser::{ExtractionRequest, parse_name_list};

use crate::cli::ModelArg;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the methods of a class or interface as JSON.
    Extract(ExtractArgs),
    /// Extract methods and render markdown documentation for each.
    Generate(GenerateArgs),
}

/// Selection of a declaration and its methods, shared by all commands.
#[derive(Clone, Debug, Args)]
pub struct TargetArgs {
    /// Declaration file to read.
    #[arg(short, long)]
    pub file: PathBuf,
    /// Class or interface name (exact, case-sensitive).
    #[arg(short, long)]
    pub class: String,
    /// Only these methods (comma-separated).
    #[arg(short, long)]
    pub include: Option<String>,
    /// Skip these methods (comma-separated).
    #[arg(short, long)]
    pub exclude: Option<String>,
}

impl TargetArgs {
    /// Build the extraction request, splitting the name lists.
    pub fn request(&self) -> ExtractionRequest {
        let mut request = ExtractionRequest::new(&self.file, self.class.clone());
        request.include_names = self.include.as_deref().map(parse_name_list);
        request.exclude_names = self.exclude.as_deref().map(parse_name_list);
        request
    }
}

/// Arguments for `sigdoc extract`.
#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for `sigdoc generate`.
#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// Completion model (overrides `render.model`).
    #[arg(short, long, value_enum)]
    pub model: Option<ModelArg>,
    /// Output directory (overrides `render.output_dir`).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Few-shot example file (overrides `render.example_path`).
    #[arg(long)]
    pub example: Option<PathBuf>,
}

