//! Completion clients for the OpenAI and Anthropic HTTP APIs.
//!
//! Clients are built explicitly from [`SigdocConfig`] and handed to the
//! renderer; nothing here is global.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sigdoc_config::{AiModel, AnthropicConfig, OpenAiConfig, SigdocConfig};

use crate::error::RenderError;
use crate::http::check_response;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// A service that turns a prompt into completion text.
pub trait CompletionClient {
    /// Send `prompt` to `model` and return the first text completion.
    fn complete(
        &self,
        model: AiModel,
        prompt: &str,
    ) -> impl Future<Output = Result<String, RenderError>> + Send;
}

fn build_http(timeout_secs: u64) -> Result<reqwest::Client, RenderError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("sigdoc/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// ── OpenAI ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'static str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
    }
}

/// Chat-completions client.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// # Errors
    /// Returns [`RenderError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &OpenAiConfig, timeout_secs: u64) -> Result<Self, RenderError> {
        Ok(Self {
            http: build_http(timeout_secs)?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl CompletionClient for OpenAiClient {
    async fn complete(&self, model: AiModel, prompt: &str) -> Result<String, RenderError> {
        let body = ChatCompletionRequest {
            model: model.model_id(),
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(%model, %url, "requesting chat completion");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let data: ChatCompletionResponse = check_response(resp).await?.json().await?;
        data.into_text().ok_or_else(|| RenderError::EmptyCompletion {
            model: model.to_string(),
        })
    }
}

// ── Anthropic ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'static str,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.is_empty())
    }
}

/// Messages-API client.
pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// # Errors
    /// Returns [`RenderError::Http`] if the HTTP client cannot be built.
    pub fn new(
        config: &AnthropicConfig,
        max_tokens: u32,
        timeout_secs: u64,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            http: build_http(timeout_secs)?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens,
        })
    }
}

impl CompletionClient for AnthropicClient {
    async fn complete(&self, model: AiModel, prompt: &str) -> Result<String, RenderError> {
        let body = MessagesRequest {
            model: model.model_id(),
            max_tokens: self.max_tokens,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        let url = format!("{}/messages", self.base_url);
        tracing::debug!(%model, %url, "requesting message completion");

        let resp = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;
        let data: MessagesResponse = check_response(resp).await?.json().await?;
        data.into_text().ok_or_else(|| RenderError::EmptyCompletion {
            model: model.to_string(),
        })
    }
}

// ── Provider selection ─────────────────────────────────────────────

/// Client for whichever provider serves the configured model.
pub enum ProviderClient {
    OpenAi(OpenAiClient),
    Anthropic(AnthropicClient),
}

impl ProviderClient {
    /// Build the client for `model` from configuration.
    ///
    /// # Errors
    /// Returns [`RenderError::Config`] if the provider has no API key and
    /// [`RenderError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &SigdocConfig, model: AiModel) -> Result<Self, RenderError> {
        config.ensure_provider(model)?;
        let render = &config.render;
        if model.is_anthropic() {
            Ok(Self::Anthropic(AnthropicClient::new(
                &config.anthropic,
                render.max_tokens,
                render.timeout_secs,
            )?))
        } else {
            Ok(Self::OpenAi(OpenAiClient::new(
                &config.openai,
                render.timeout_secs,
            )?))
        }
    }
}

impl CompletionClient for ProviderClient {
    async fn complete(&self, model: AiModel, prompt: &str) -> Result<String, RenderError> {
        match self {
            Self::OpenAi(client) => client.complete(model, prompt).await,
            Self::Anthropic(client) => client.complete(model, prompt).await,
        }
    }
}
