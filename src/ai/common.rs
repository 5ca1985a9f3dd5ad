use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::ai::config::AiConfig;
use crate::error::GenerationError;

/// Sampling temperature for couplet requests. Kept high so repeated prompts
/// produce varied verses.
pub const TEMPERATURE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Send one non-streaming chat completion request and return the first
/// choice's text.
#[instrument(level = "trace", skip(client, config, messages), fields(model = %config.model))]
pub async fn request_completion(
    client: &reqwest::Client,
    config: &AiConfig,
    messages: &[ChatMessage],
) -> Result<String, GenerationError> {
    let url = config.chat_url();
    let body = ChatRequest {
        model: &config.model,
        messages,
        temperature: TEMPERATURE,
        max_tokens: config.max_tokens,
    };
    debug!(url = %url, message_count = messages.len(), "sending chat completion request");

    let resp = client
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "Completion API error");
        return Err(GenerationError::Status {
            status,
            body: err_text,
        });
    }

    let raw = resp.text().await?;
    trace!(raw = %raw, "chat response");
    parse_chat_content(&raw)
}

/// Pull the first choice's message content out of a chat completion body.
pub fn parse_chat_content(raw: &str) -> Result<String, GenerationError> {
    let chat: ChatResponse =
        serde_json::from_str(raw).map_err(GenerationError::MalformedResponse)?;
    chat.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(GenerationError::MissingChoice)
}
