//! Gemini `generateContent` payload types, shared by requests and responses.

use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "user";
pub const ROLE_MODEL: &str = "model";

/// A role-tagged content block. Responses may omit the role or the parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part::text(text)],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::text(ROLE_USER, text)
    }
}

/// One part of a content block. Non-text parts (function calls, inline data)
/// deserialize with `text: None` and are skipped during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// What the orchestrators hand to the generation service.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    /// A single instruction block, sent as one `user` turn.
    Prompt(String),
    /// An ordered, role-tagged conversation.
    Contents(Vec<Content>),
}

impl GenerationRequest {
    pub fn into_contents(self) -> Vec<Content> {
        match self {
            GenerationRequest::Prompt(prompt) => vec![Content::user(prompt)],
            GenerationRequest::Contents(contents) => contents,
        }
    }

    /// Every text fragment of the request, joined with newlines.
    #[cfg(test)]
    pub fn flattened_text(&self) -> String {
        match self {
            GenerationRequest::Prompt(prompt) => prompt.clone(),
            GenerationRequest::Contents(contents) => contents
                .iter()
                .flat_map(|c| c.parts.iter())
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// Top-level `generateContent` response. Every level may be empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

impl GenerateContentResponse {
    /// Why the first candidate stopped, when the service says so.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }

    /// Builds a single-candidate response from text parts.
    #[cfg(test)]
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some(ROLE_MODEL.to_string()),
                    parts: parts.into_iter().map(Part::text).collect(),
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            usage_metadata: None,
        }
    }
}
