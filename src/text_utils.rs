use tracing::trace;

/// Longest prompt, in characters, forwarded to the model.
pub const MAX_PROMPT_CHARS: usize = 100;

/// Clean a user-supplied prompt before it is sent to the model.
///
/// Leading and trailing whitespace is removed and the result is cut to
/// [`MAX_PROMPT_CHARS`] characters. Over-long input is truncated silently.
pub fn normalize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();
    let total = trimmed.chars().count();
    if total > MAX_PROMPT_CHARS {
        trace!(total, "Truncating prompt");
    }
    trimmed.chars().take(MAX_PROMPT_CHARS).collect()
}

/// First `max` characters of `text`, for log lines.
pub fn snippet(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
