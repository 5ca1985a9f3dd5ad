use std::env;

use tracing::warn;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_MAX_TOKENS: u32 = 100;

#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub max_tokens: Option<u32>,
}

impl AiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("OPENAI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return None,
        };
        Some(Self {
            api_key,
            endpoint: non_empty_var("OPENAI_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: non_empty_var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: max_tokens_from_env(),
        })
    }

    /// Full URL of the chat completions resource under the configured base.
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn max_tokens_from_env() -> Option<u32> {
    let Some(raw) = non_empty_var("OPENAI_MAX_TOKENS") else {
        return Some(DEFAULT_MAX_TOKENS);
    };
    match raw.trim().parse::<u32>() {
        Ok(0) => None,
        Ok(n) => Some(n),
        Err(err) => {
            warn!(value = %raw, error = %err, "Ignoring invalid OPENAI_MAX_TOKENS");
            None
        }
    }
}
