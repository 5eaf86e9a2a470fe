/// LLM Client — the single point of entry for all chat-completion calls.
///
/// No other module talks to the upstream model API directly; handlers and the
/// report generator only see the `ModelClient` trait.
///
/// Model: deepseek-reasoner (hardcoded, reports must come from one model)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for every report.
pub const MODEL: &str = "deepseek-reasoner";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Token accounting reported by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// What one completion call hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub content: String,
    /// Chain-of-thought text, only present for reasoning models.
    pub reasoning: Option<String>,
    pub usage: Option<Usage>,
}

/// Anything that can turn a prompt into a `ModelReply`.
///
/// Carried in `AppState` as `Arc<dyn ModelClient>` so tests can swap in a stub.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<ModelReply, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    reasoning_content: Option<String>,
}

impl ChatResponse {
    fn into_reply(self) -> Result<ModelReply, LlmError> {
        let message = self
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyContent)?
            .message;

        let content = message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyContent)?;

        Ok(ModelReply {
            content,
            reasoning: message.reasoning_content,
            usage: self.usage,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completion client for OpenAI-compatible endpoints.
/// Makes exactly one request per call; failures go straight back to the caller.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl ModelClient for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<ModelReply, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let reply = response.json::<ChatResponse>().await?.into_reply()?;

        if let Some(usage) = &reply.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}, total_tokens={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(reply)
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
