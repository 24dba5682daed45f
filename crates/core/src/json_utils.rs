//! Parsing of JSON returned inside free-form model answers.
//!
//! Models often wrap JSON in a ```` ```json ```` fence. Parsing happens in two
//! stages: locate a fenced payload, then parse either that payload or the
//! whole answer. Each stage has its own error variant.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

static FENCED_JSON_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").unwrap());

#[derive(Debug, Error)]
pub enum AiJsonError {
    /// A ```` ```json ```` block was found but its contents did not parse.
    #[error("fenced JSON block did not parse: {0}")]
    FencedPayload(#[source] serde_json::Error),

    /// No fenced block was found and the answer itself did not parse.
    #[error("answer is not JSON: {0}")]
    RawAnswer(#[source] serde_json::Error),
}

/// Contents of the first non-empty ```` ```json ```` block, trimmed.
#[must_use]
pub fn extract_fenced_json(text: &str) -> Option<&str> {
    FENCED_JSON_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|payload| !payload.is_empty())
}

/// Parses a model answer as JSON, preferring a fenced payload when present.
///
/// When a fenced block exists only its contents are parsed; the rest of the
/// answer is not retried.
///
/// # Errors
/// `FencedPayload` if the fenced block is invalid, `RawAnswer` if there is no
/// fenced block and the whole answer is invalid.
pub fn parse_ai_json(answer: &str) -> Result<Value, AiJsonError> {
    match extract_fenced_json(answer) {
        Some(payload) => serde_json::from_str(payload).map_err(AiJsonError::FencedPayload),
        None => serde_json::from_str(answer).map_err(AiJsonError::RawAnswer),
    }
}

/// First `max_chars` characters of `text`.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_block() {
        let input = "Here you go:\n```json\n{\"key\": \"value\"}\n```\nThanks";
        assert_eq!(extract_fenced_json(input), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_extract_ignores_unlabeled_block() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_fenced_json(input), None);
    }

    #[test]
    fn test_extract_empty_block_is_none() {
        assert_eq!(extract_fenced_json("```json\n```"), None);
    }

    #[test]
    fn test_parse_fenced() {
        let input = "```json\n{\"performance\":{\"status\":\"Good\"}}\n```";
        let value = parse_ai_json(input).unwrap();
        assert_eq!(value["performance"]["status"], "Good");
    }

    #[test]
    fn test_parse_raw() {
        let value = parse_ai_json("  {\"forecast\": 4590}  ").unwrap();
        assert_eq!(value["forecast"], 4590);
    }

    #[test]
    fn test_parse_bad_fence_is_fenced_error() {
        let err = parse_ai_json("```json\n{not json}\n```").unwrap_err();
        assert!(matches!(err, AiJsonError::FencedPayload(_)));
    }

    #[test]
    fn test_parse_plain_text_is_raw_error() {
        let err = parse_ai_json("not json at all").unwrap_err();
        assert!(matches!(err, AiJsonError::RawAnswer(_)));
    }

    #[test]
    fn test_preview_counts_chars() {
        assert_eq!(preview("привет мир", 6), "привет");
        assert_eq!(preview("short", 100), "short");
    }
}
