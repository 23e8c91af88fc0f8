//! Recovery of JSON payloads from raw model text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)\s*```").expect("fence pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonRecoveryError {
    #[error("model returned an empty response")]
    Empty,

    #[error("model response is not valid JSON: {0}")]
    Unrecoverable(String),
}

/// Replays backspace control characters as deletions of the preceding character.
pub fn apply_backspaces(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '\u{8}' {
            out.pop();
        } else {
            out.push(ch);
        }
    }
    out
}

/// Finds the JSON body inside a fenced block or between the outermost brackets.
pub fn recover_json_span(text: &str) -> Option<&str> {
    if let Some(body) = FENCE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|body| body.starts_with('{') || body.starts_with('['))
    {
        return Some(body);
    }

    let start = text.find(['{', '['])?;
    let closer = if text[start..].starts_with('{') { '}' } else { ']' };
    let end = text.rfind(closer)?;
    (end > start).then(|| &text[start..=end])
}

/// Direct parse first; on failure, one more attempt on the recovered span.
pub fn parse_model_json(raw: &str) -> Result<Value, JsonRecoveryError> {
    let cleaned = apply_backspaces(raw);
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return Err(JsonRecoveryError::Empty);
    }

    let direct_err = match serde_json::from_str(trimmed) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    let span = recover_json_span(trimmed)
        .ok_or_else(|| JsonRecoveryError::Unrecoverable(direct_err.to_string()))?;

    log::debug!("Recovering JSON span of {} bytes from model output", span.len());
    serde_json::from_str(span).map_err(|err| JsonRecoveryError::Unrecoverable(err.to_string()))
}
