//! Axum route handlers for the CV API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::cv::analysis::{analyze_cv, CvInsights};
use crate::cv::pdf::join_pages;
use crate::errors::AppError;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Serialize)]
pub struct SummarizeCvResponse {
    pub data: CvInsights,
    pub raw_text: String,
}

/// POST /summarize-cv
///
/// Input validation (file type, extractable text) happens before any Gemini call.
pub async fn handle_summarize_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SummarizeCvResponse>, AppError> {
    let upload = read_pdf_upload(&mut multipart).await?;
    info!("Received CV upload: {} bytes", upload.len());

    // pdf-extract is CPU-bound and may panic on malformed files; keep it off the async workers.
    let extractor = state.pdf.clone();
    let pages = tokio::task::spawn_blocking(move || extractor.extract_pages(&upload))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::Validation("Could not read PDF: the file is malformed.".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}")))?;

    let raw_text = join_pages(&pages);
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation("No text found in PDF.".to_string()));
    }

    let data = analyze_cv(state.llm.as_ref(), &raw_text)
        .await
        .map_err(|e| AppError::Llm(format!("Error processing CV: {e}")))?;

    Ok(Json(SummarizeCvResponse { data, raw_text }))
}

/// Finds the `file` field and checks it was declared as a PDF.
async fn read_pdf_upload(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let is_pdf = field
            .content_type()
            .is_some_and(|ct| ct.starts_with(PDF_CONTENT_TYPE));
        if !is_pdf {
            return Err(AppError::Validation("Please upload a PDF file.".to_string()));
        }

        return field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")));
    }

    Err(AppError::Validation("No file uploaded.".to_string()))
}
