//! CV analysis orchestrator: prompt → generate → extract → structured recovery.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::cv::prompts::build_cv_prompt;
use crate::llm_client::structured::{recover, CoercionError, StructuredReply};
use crate::llm_client::types::GenerationRequest;
use crate::llm_client::{generate_text, GenerationService, LlmError};

pub const EMPTY_SUMMARY_FALLBACK: &str = "Unable to generate summary. Please try again.";

/// Result of a CV analysis. Callers must treat this as a tagged union.
///
/// `Structured` carries the model's object exactly as parsed. Keys are not defaulted,
/// so a reply missing `rolesAndDomains` is passed through without it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CvInsights {
    Structured(Map<String, Value>),
    Summary { summary: String },
}

impl StructuredReply for CvInsights {
    const KIND: &'static str = "CV insights";

    fn from_object(object: Map<String, Value>) -> Result<Self, CoercionError> {
        Ok(CvInsights::Structured(object))
    }

    fn fallback(raw: &str) -> Self {
        CvInsights::Summary {
            summary: raw.to_string(),
        }
    }
}

/// Analyzes already-extracted CV text. The caller guarantees `cv_text` is not blank.
pub async fn analyze_cv(llm: &dyn GenerationService, cv_text: &str) -> Result<CvInsights, LlmError> {
    info!("Analyzing CV: {} chars of text", cv_text.chars().count());

    let request = GenerationRequest::Prompt(build_cv_prompt(cv_text));
    let text = generate_text(llm, request).await?;

    if text.is_empty() {
        warn!("Gemini returned no text for CV analysis; using fallback summary");
        return Ok(CvInsights::Summary {
            summary: EMPTY_SUMMARY_FALLBACK.to_string(),
        });
    }

    Ok(recover::<CvInsights>(&text))
}
