//! Locating the couplet JSON inside free-form model output.
//!
//! Models often wrap the object in prose or a fenced code block. Fence
//! markers are stripped first, then the span from the first `{` to the last
//! `}` is taken as the payload.

use tracing::{trace, warn};

use crate::couplet::Couplet;
use crate::error::GenerationError;
use crate::text_utils::snippet;

const FENCE: &str = "```";

/// Remove every Markdown fence marker (```` ``` ````, optionally followed by
/// `json` and a newline) and trim the result.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        rest = rest.strip_prefix("json").unwrap_or(rest);
        rest = rest.strip_prefix('\n').unwrap_or(rest);
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Return the candidate JSON object embedded in `response`.
pub fn extract_json(response: &str) -> Result<String, GenerationError> {
    let cleaned = strip_code_fences(response);
    let start = cleaned.find('{');
    let end = cleaned.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start <= end => {
            let json = &cleaned[start..=end];
            trace!(json, "Extracted JSON span");
            Ok(json.to_string())
        }
        _ => Err(GenerationError::NoJson),
    }
}

/// Extract and decode a [`Couplet`] from raw model output.
pub fn parse_couplet(response: &str) -> Result<Couplet, GenerationError> {
    let json = extract_json(response).inspect_err(|_| {
        warn!(snippet = %snippet(response, 200), "No JSON object in model output");
    })?;
    serde_json::from_str(&json).map_err(|err| {
        warn!(snippet = %snippet(&json, 200), error = %err, "Model output is not a couplet");
        GenerationError::Parse(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const OBJECT: &str = r#"{"上联":"春风送暖入屠苏","下联":"瑞雪迎新兆丰年","横批":"喜气盈门","总结":"福"}"#;

    #[test]
    fn strips_json_fence() {
        let text = format!("```json\n{OBJECT}\n```");
        assert_eq!(strip_code_fences(&text), OBJECT);
    }

    #[test]
    fn strips_bare_fence() {
        let text = format!("```\n{OBJECT}```");
        assert_eq!(strip_code_fences(&text), OBJECT);
    }

    #[test]
    fn extracts_from_prose() {
        let text = format!("好的，这是您的春联：{OBJECT} 祝您新年快乐！");
        assert_eq!(extract_json(&text).unwrap(), OBJECT);
    }

    #[test]
    fn missing_braces_fail() {
        assert!(matches!(
            extract_json("抱歉，我无法完成"),
            Err(GenerationError::NoJson)
        ));
        assert!(matches!(extract_json("{ 上联"), Err(GenerationError::NoJson)));
        assert!(matches!(extract_json("上联 }"), Err(GenerationError::NoJson)));
    }

    #[test]
    fn reversed_braces_fail() {
        assert!(matches!(extract_json("} 然后 {"), Err(GenerationError::NoJson)));
    }

    #[test]
    fn truncated_object_is_parse_failure() {
        let text = r#"{"上联":"春风送暖入屠苏","下联":"瑞雪迎新兆丰年"} and {"横批":"#;
        assert!(matches!(parse_couplet(text), Err(GenerationError::Parse(_))));
    }

    #[test]
    fn control_characters_are_parse_failure() {
        let text = "{\"上联\":\"春风\n送暖\",\"下联\":\"a\",\"横批\":\"b\",\"总结\":\"c\"}";
        assert!(matches!(parse_couplet(text), Err(GenerationError::Parse(_))));
    }

    #[test]
    fn missing_field_is_parse_failure() {
        let text = r#"{"上联":"春风送暖入屠苏","下联":"瑞雪迎新兆丰年","总结":"福"}"#;
        assert!(matches!(parse_couplet(text), Err(GenerationError::Parse(_))));
    }

    #[test]
    fn parses_fenced_response() {
        let text = format!("以下是结果：\n```json\n{OBJECT}\n```");
        let couplet = parse_couplet(&text).unwrap();
        assert_eq!(couplet.upper, "春风送暖入屠苏");
        assert_eq!(couplet.lower, "瑞雪迎新兆丰年");
        assert_eq!(couplet.horizontal, "喜气盈门");
        assert_eq!(couplet.summary, "福");
    }

    proptest! {
        #[test]
        fn prop_extraction_never_panics(s in "(?s).*") {
            let _ = parse_couplet(&s);
        }

        #[test]
        fn prop_no_brace_always_fails(s in "[^{}]*") {
            prop_assert!(matches!(extract_json(&s), Err(GenerationError::NoJson)));
        }

        #[test]
        fn prop_embedded_object_survives_prose(
            before in "[^{}`]{0,40}",
            after in "[^{}`]{0,40}",
            fenced in any::<bool>(),
        ) {
            let body = if fenced {
                format!("```json\n{OBJECT}\n```")
            } else {
                OBJECT.to_string()
            };
            let text = format!("{before}{body}{after}");
            let json = extract_json(&text).unwrap();
            let extracted: serde_json::Value = serde_json::from_str(&json).unwrap();
            let original: serde_json::Value = serde_json::from_str(OBJECT).unwrap();
            prop_assert_eq!(extracted, original);
        }
    }
}
