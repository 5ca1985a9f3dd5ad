//! Instructions sent to the completion model.
//!
//! The system prompt is the only place the couplet rules live: line length,
//! matching character counts, no punctuation and the exact JSON shape. None
//! of these are checked after the fact.

use crate::ai::common::ChatMessage;
use crate::text_utils::normalize_prompt;

/// System prompt describing the couplet rules and the required JSON output.
pub const COUPLET_SYSTEM_PROMPT: &str = "根据我的提示生成一副春联，要求包含上、下联，每句话需保持五至十二字，且上下联字数必须一致，然后根据上下联给出不超过五个字的横批，同时总结全文给出一个字的总结。不能出现任何标点符号，不使用生僻字，并按照下面格式输出，确保可以被JSON.parse正确解析，注意全部使用半角符号，不要有任何多余的解释内容。
{
  \"上联\": \"\",
  \"下联\": \"\",
  \"横批\": \"\",
  \"总结\": \"\"
}";

/// Prefix of the user message carrying the caller's prompt.
pub const USER_PROMPT_PREFIX: &str = "提示词：";

/// Build the ordered chat messages for a couplet request.
///
/// The system prompt always comes first. A user message is appended only
/// when the prompt is non-empty after [`normalize_prompt`].
pub fn build_messages(prompt: Option<&str>) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(COUPLET_SYSTEM_PROMPT)];
    let prompt = normalize_prompt(prompt.unwrap_or_default());
    if !prompt.is_empty() {
        messages.push(ChatMessage::user(format!("{USER_PROMPT_PREFIX}{prompt}")));
    }
    messages
}
