use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use sigdoc_config::{AiModel, SigdocConfig};
use sigdoc_render::{MarkdownWriter, ModelRenderer, Pipeline, ProviderClient, load_example};

use crate::cli::{GenerateArgs, GlobalFlags};
use crate::commands::extract::extract_methods;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GenerateResponse {
    declaration: String,
    model: String,
    rendered: usize,
    files: Vec<PathBuf>,
}

/// Handle `sigdoc generate`.
pub async fn handle(
    args: &GenerateArgs,
    config: &SigdocConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = args.target.request();
    let model = args.model.map_or(config.render.model, AiModel::from);
    let output_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.render.output_dir.clone());
    let example_path = args
        .example
        .as_deref()
        .or(config.render.example_path.as_deref());

    let methods = extract_methods(&request)?;
    let mut response = GenerateResponse {
        declaration: request.declaration_name.clone(),
        model: model.to_string(),
        rendered: 0,
        files: Vec::new(),
    };
    if methods.is_empty() {
        return output(&response, flags.format);
    }

    let example = load_example(example_path).context("failed to read few-shot example")?;
    let client = ProviderClient::from_config(config, model)
        .with_context(|| format!("cannot use model {model}"))?;
    let pipeline = Pipeline::new(
        ModelRenderer::new(client, model, example),
        MarkdownWriter::new(output_dir),
    );

    let summary = pipeline
        .run(&methods)
        .await
        .context("documentation generation failed")?;
    response.rendered = summary.rendered;
    response.files = summary.files;
    output(&response, flags.format)
}
