//! # sigdoc-render
//!
//! Turns extracted method records into markdown documentation.
//!
//! Each [`ExtractedMethod`](sigdoc_parser::ExtractedMethod) becomes a prompt
//! ([`build_prompt`]) sent to a completion model through a
//! [`CompletionClient`]. The returned fragment is appended to
//! `{output_dir}/{Declaration}.md` by [`MarkdownWriter`]. [`Pipeline`] drives
//! the records one at a time, in extraction order.

pub mod client;
pub mod error;
mod http;
pub mod prompt;
pub mod renderer;
pub mod writer;

pub use client::{AnthropicClient, CompletionClient, OpenAiClient, ProviderClient};
pub use error::RenderError;
pub use prompt::{build_prompt, load_example};
pub use renderer::{DocumentationRenderer, ModelRenderer, Pipeline, RenderSummary};
pub use sigdoc_config::AiModel;
pub use writer::MarkdownWriter;
