//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::interview::evaluation::evaluate_answer;
use crate::interview::models::{AnswerEvaluationRequest, InterviewFeedback, InterviewQuestionRequest};
use crate::interview::question::generate_question;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InterviewQuestionResponse {
    pub question: String,
}

/// POST /generate-interview-question
pub async fn handle_generate_question(
    State(state): State<AppState>,
    Json(request): Json<InterviewQuestionRequest>,
) -> Result<Json<InterviewQuestionResponse>, AppError> {
    if request.question_number == 0 {
        return Err(AppError::Validation(
            "questionNumber must be a positive integer.".to_string(),
        ));
    }

    let question = generate_question(state.llm.as_ref(), &request)
        .await
        .map_err(|e| AppError::Llm(format!("Error generating question: {e}")))?;

    Ok(Json(InterviewQuestionResponse { question }))
}

/// POST /evaluate-interview-answer
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerEvaluationRequest>,
) -> Result<Json<InterviewFeedback>, AppError> {
    let feedback = evaluate_answer(state.llm.as_ref(), &request)
        .await
        .map_err(|e| AppError::Llm(format!("Error evaluating answer: {e}")))?;

    Ok(Json(feedback))
}
