use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LlmConfig;
use crate::errors::{AppError, AppResult};

/// Language-model backend answering one composed query.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// One call, no retry. Transport, quota and auth failures are `AppError::Completion`.
    async fn ask(&self, system_instruction: &str, query: &str) -> AppResult<String>;
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat-completions client.
pub struct OpenAiCompletionClient {
    http: Client,
    config: LlmConfig,
}

impl OpenAiCompletionClient {
    pub fn new(config: LlmConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Completion(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletionClient {
    async fn ask(&self, system_instruction: &str, query: &str) -> AppResult<String> {
        let url = self.config.chat_completions_url();
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
            stream: false,
            max_tokens: self.config.max_output_tokens,
            temperature: self.config.temperature,
        };

        debug!("Calling completion endpoint (url={}, model={}, query_bytes={})", url, self.config.model, query.len());

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Completion(format!("Failed to call completion endpoint (url={}): {}", url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::Completion(format!(
                "Completion endpoint returned {}: {} (url={})",
                status, text, url
            )));
        }

        let parsed: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Completion(format!("Failed to decode completion response: {} (url={})", e, url)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::Completion("Completion response contained no answer".into()))
    }
}
