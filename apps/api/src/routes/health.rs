use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Interview Coach API is running" }))
}

/// GET /health
/// Returns a simple status object with service version and the configured model.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "coach-api",
        "model": state.llm.model()
    }))
}

/// OPTIONS on any endpoint. Real CORS preflights are answered by the CORS layer first.
pub async fn preflight_handler() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}
