//! Axum route handlers for the Chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::conversation::ChatTurn;
use crate::chat::responder::reply;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let text = reply(state.llm.as_ref(), &request.history, &request.message)
        .await
        .map_err(|e| AppError::Llm(format!("Error talking to Gemini: {e}")))?;

    Ok(Json(ChatResponse { reply: text }))
}
