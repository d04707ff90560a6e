mod chat;
mod config;
mod cv;
mod errors;
mod interview;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cv::pdf::PdfExtractText;
use crate::llm_client::{GeminiClient, GenerationService};
use crate::routes::build_app;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Coach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Gemini client
    let llm = GeminiClient::from_config(&config);
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; generation endpoints will return 500");
    }
    info!("Gemini client initialized (model: {})", llm.model());

    match &config.cors_allowed_origins {
        Some(origins) => info!("CORS restricted to {} origin(s)", origins.len()),
        None => info!("CORS open to all origins"),
    }

    let state = AppState {
        llm: Arc::new(llm),
        pdf: Arc::new(PdfExtractText),
        config: config.clone(),
    };

    let app = build_app(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
