use std::sync::Arc;

use crate::config::Config;
use crate::cv::pdf::PdfTextExtractor;
use crate::llm_client::GenerationService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutable: every request builds its own prompt and result.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn GenerationService>,
    /// Swappable so route tests can feed fixed page text instead of real PDFs.
    pub pdf: Arc<dyn PdfTextExtractor>,
    pub config: Config,
}
