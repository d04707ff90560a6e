//! Chat orchestrator: assemble → generate → extract → fallback.

use tracing::{info, warn};

use crate::chat::conversation::{assemble, ChatTurn};
use crate::llm_client::types::GenerationRequest;
use crate::llm_client::{generate_text, GenerationService, LlmError};

pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm sorry, I couldn't generate a response. Please try again.";

/// Produces the model's reply to `message` given the caller's history.
pub async fn reply(
    llm: &dyn GenerationService,
    history: &[ChatTurn],
    message: &str,
) -> Result<String, LlmError> {
    info!(
        "Chat turn: history_len={}, message_len={}",
        history.len(),
        message.len()
    );

    let request = GenerationRequest::Contents(assemble(history, message));
    let text = generate_text(llm, request).await?;

    if text.is_empty() {
        warn!("Gemini returned no text for chat turn; using fallback reply");
        return Ok(EMPTY_REPLY_FALLBACK.to_string());
    }

    Ok(text)
}
