//! End-to-end rendering from the parser fixture to markdown files, with a
//! stub completion client standing in for the provider API.

use std::path::PathBuf;
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use sigdoc_parser::{ExtractionRequest, extract};
use sigdoc_render::{
    AiModel, CompletionClient, MarkdownWriter, ModelRenderer, Pipeline, RenderError,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../sigdoc-parser/tests/fixtures/player.d.ts")
}

/// Replies with a markdown heading per prompted method, prefixed with the
/// `filename:` line models tend to emit.
#[derive(Default)]
struct StubClient {
    prompts: Mutex<Vec<String>>,
}

impl CompletionClient for StubClient {
    async fn complete(&self, _model: AiModel, prompt: &str) -> Result<String, RenderError> {
        self.prompts.lock().expect("lock").push(prompt.to_string());
        let name = prompt
            .split(" Method: ")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .unwrap_or("unknown");
        Ok(format!("filename: player.md\n## {name}"))
    }
}

#[tokio::test]
async fn renders_player_methods_into_one_file() {
    let request = ExtractionRequest::new(fixture(), "Player").with_exclude(["SendUnitSay"]);
    let methods = extract(&request).expect("extract");
    let expected: Vec<&str> = methods.iter().map(|m| m.method_name.as_str()).collect();

    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = ModelRenderer::new(StubClient::default(), AiModel::Gpt3, "EXAMPLE".into());
    let pipeline = Pipeline::new(renderer, MarkdownWriter::new(dir.path().join("classes")));

    let summary = pipeline.run(&methods).await.expect("run");
    assert_eq!(summary.rendered, methods.len());
    assert_eq!(summary.files, vec![dir.path().join("classes/Player.md")]);

    let content = std::fs::read_to_string(&summary.files[0]).expect("read");
    assert!(!content.contains("filename:"));
    let headings: Vec<&str> = content
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .collect();
    assert_eq!(headings, expected);
}

#[tokio::test]
async fn rerun_appends_rather_than_replaces() {
    let request = ExtractionRequest::new(fixture(), "Item");
    let methods = extract(&request).expect("extract");
    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = ModelRenderer::new(StubClient::default(), AiModel::Claude, String::new());
    let pipeline = Pipeline::new(renderer, MarkdownWriter::new(dir.path()));

    pipeline.run(&methods).await.expect("first run");
    pipeline.run(&methods).await.expect("second run");

    let content = std::fs::read_to_string(dir.path().join("Item.md")).expect("read");
    assert_eq!(content.matches("## GetEntry").count(), 2);
}
