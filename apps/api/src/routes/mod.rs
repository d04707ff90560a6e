pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::chat::handlers as chat;
use crate::config::Config;
use crate::cv::handlers as cv;
use crate::interview::handlers as interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route(
            "/",
            get(health::root_handler).options(health::preflight_handler),
        )
        .route("/health", get(health::health_handler))
        .route(
            "/chat",
            post(chat::handle_chat).options(health::preflight_handler),
        )
        .route(
            "/summarize-cv",
            post(cv::handle_summarize_cv)
                .options(health::preflight_handler)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/generate-interview-question",
            post(interview::handle_generate_question).options(health::preflight_handler),
        )
        .route(
            "/evaluate-interview-answer",
            post(interview::handle_evaluate_answer).options(health::preflight_handler),
        )
        .with_state(state)
}

/// The full service: routes plus request tracing and CORS.
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Every origin is allowed unless `CORS_ALLOWED_ORIGINS` narrows it.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let Some(origins) = &config.cors_allowed_origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {origin:?}: {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
