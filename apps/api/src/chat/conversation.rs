//! Conversation assembly: maps caller history onto Gemini content blocks.

use serde::{Deserialize, Serialize};

use crate::llm_client::types::{Content, ROLE_MODEL, ROLE_USER};

/// Who authored a turn. Gemini only knows these two conversational roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => ROLE_USER,
            ChatRole::Model => ROLE_MODEL,
        }
    }
}

/// One prior turn of the conversation, as sent by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Builds the ordered content list: every history turn as-is, then the new user message.
///
/// History is never reordered, deduplicated or truncated.
pub fn assemble(history: &[ChatTurn], new_message: &str) -> Vec<Content> {
    history
        .iter()
        .map(|turn| Content::text(turn.role.as_str(), turn.content.clone()))
        .chain(std::iter::once(Content::user(new_message)))
        .collect()
}
