//! Turning raw `generateContent` responses into usable text and JSON.

use serde_json::{Map, Value};

use crate::llm_client::types::GenerateContentResponse;

/// Concatenates every text part of the first candidate, in order.
///
/// Later candidates are ignored. An empty string means "no usable reply"; callers
/// substitute their own fallback rather than passing it on.
pub fn extract_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Removes at most one markdown fence from each end of `text`.
///
/// "```json" is checked before a bare "```" so the language tag never leaks into the payload.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Parses a JSON object out of model text after fence stripping.
///
/// Only objects are accepted. No attempt is made to scrape JSON embedded in prose.
pub fn parse_fenced_json(text: &str) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_str(strip_json_fences(text))
}
