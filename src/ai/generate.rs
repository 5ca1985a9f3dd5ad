use tracing::{debug, info, instrument};

use crate::ai::common::request_completion;
use crate::ai::config::AiConfig;
use crate::ai::extract::parse_couplet;
use crate::ai::prompts::build_messages;
use crate::couplet::Couplet;
use crate::error::GenerationError;

/// Generate a couplet for `prompt` with a single completion request.
///
/// There is no retry. Any transport, extraction or parse problem is returned
/// as a [`GenerationError`]; picking a fallback is left to the caller.
#[instrument(level = "trace", skip(client, config))]
pub async fn generate_couplet(
    client: &reqwest::Client,
    config: &AiConfig,
    prompt: Option<&str>,
) -> Result<Couplet, GenerationError> {
    let messages = build_messages(prompt);
    let content = request_completion(client, config, &messages).await?;
    debug!(content = %content, "completion content");

    let couplet = parse_couplet(&content)?;
    info!(
        model = %config.model,
        with_prompt = messages.len() > 1,
        summary = %couplet.summary,
        "Generated couplet"
    );
    Ok(couplet)
}
