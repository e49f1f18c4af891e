//! Documentation renderers and the sequential render pipeline.

use std::future::Future;
use std::path::PathBuf;

use serde::Serialize;
use sigdoc_config::AiModel;
use sigdoc_parser::ExtractedMethod;

use crate::client::CompletionClient;
use crate::error::RenderError;
use crate::prompt::build_prompt;
use crate::writer::MarkdownWriter;

/// Produces one markdown fragment per extracted method.
pub trait DocumentationRenderer {
    fn render(
        &self,
        method: &ExtractedMethod,
    ) -> impl Future<Output = Result<String, RenderError>> + Send;
}

/// Renders by prompting a completion model with a few-shot example.
pub struct ModelRenderer<C> {
    client: C,
    model: AiModel,
    example: String,
}

impl<C> ModelRenderer<C> {
    #[must_use]
    pub const fn new(client: C, model: AiModel, example: String) -> Self {
        Self {
            client,
            model,
            example,
        }
    }
}

impl<C: CompletionClient + Sync> DocumentationRenderer for ModelRenderer<C> {
    async fn render(&self, method: &ExtractedMethod) -> Result<String, RenderError> {
        let prompt = build_prompt(&self.example, method);
        self.client.complete(self.model, &prompt).await
    }
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub rendered: usize,
    /// Files written, in first-write order, without duplicates.
    pub files: Vec<PathBuf>,
}

/// Renders records one at a time, in order, appending each fragment to its
/// declaration's markdown file.
pub struct Pipeline<R> {
    renderer: R,
    writer: MarkdownWriter,
}

impl<R: DocumentationRenderer> Pipeline<R> {
    #[must_use]
    pub const fn new(renderer: R, writer: MarkdownWriter) -> Self {
        Self { renderer, writer }
    }

    /// Render and write every method.
    ///
    /// Stops at the first failure; fragments already written stay on disk.
    ///
    /// # Errors
    /// Propagates the first [`RenderError`] from the renderer or writer.
    pub async fn run(&self, methods: &[ExtractedMethod]) -> Result<RenderSummary, RenderError> {
        tracing::debug!(
            count = methods.len(),
            output_dir = %self.writer.output_dir().display(),
            "rendering documentation"
        );
        let mut summary = RenderSummary::default();
        for method in methods {
            let fragment = self.renderer.render(method).await?;
            tracing::info!(
                "writing documentation for {}",
                method.qualified_name()
            );
            let path = self.writer.append(&method.declaration_name, &fragment)?;
            if !summary.files.contains(&path) {
                summary.files.push(path);
            }
            summary.rendered += 1;
        }
        Ok(summary)
    }
}
