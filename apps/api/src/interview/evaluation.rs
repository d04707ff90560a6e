//! Answer evaluation: scores a candidate answer and always returns complete feedback.
//!
//! Per-field defaults fill gaps in an otherwise valid reply. Anything worse (prose,
//! a non-object, a field of the wrong shape, a non-finite score) collapses to the
//! fixed fallback so the caller always gets every field.

use serde_json::{Map, Value};
use tracing::info;

use crate::interview::models::{AnswerEvaluationRequest, InterviewFeedback};
use crate::interview::prompts::build_evaluation_prompt;
use crate::llm_client::structured::{describe, recover, CoercionError, StructuredReply};
use crate::llm_client::types::GenerationRequest;
use crate::llm_client::{generate_text, GenerationService, LlmError};

pub const DEFAULT_SCORE: f64 = 5.0;
pub const MAX_SCORE: f64 = 10.0;
pub const DEFAULT_FEEDBACK: &str = "Thank you for your answer.";
pub const FALLBACK_FEEDBACK_PREFIX: &str = "Evaluation completed. ";
/// How much of an unparseable reply is echoed back in the fallback feedback.
pub const FALLBACK_EXCERPT_CHARS: usize = 200;

fn default_strengths() -> Vec<String> {
    vec!["You provided an answer to the question".to_string()]
}

fn default_improvements() -> Vec<String> {
    vec![
        "Add specific examples from your experience".to_string(),
        "Structure your answer more clearly".to_string(),
    ]
}

impl StructuredReply for InterviewFeedback {
    const KIND: &'static str = "interview feedback";

    fn from_object(object: Map<String, Value>) -> Result<Self, CoercionError> {
        Ok(InterviewFeedback {
            score: coerce_score(object.get("score"))?,
            feedback: coerce_text("feedback", object.get("feedback"))?
                .unwrap_or_else(|| DEFAULT_FEEDBACK.to_string()),
            strengths: coerce_list("strengths", object.get("strengths"))?
                .unwrap_or_else(default_strengths),
            improvements: coerce_list("improvements", object.get("improvements"))?
                .unwrap_or_else(default_improvements),
        })
    }

    fn fallback(raw: &str) -> Self {
        let excerpt: String = raw.chars().take(FALLBACK_EXCERPT_CHARS).collect();
        InterviewFeedback {
            score: DEFAULT_SCORE,
            feedback: format!("{FALLBACK_FEEDBACK_PREFIX}{excerpt}"),
            strengths: default_strengths(),
            improvements: default_improvements(),
        }
    }
}

/// Accepts numbers and numeric strings. Missing or null means the default score.
fn coerce_score(value: Option<&Value>) -> Result<f64, CoercionError> {
    let score = match value {
        None | Some(Value::Null) => return Ok(DEFAULT_SCORE),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .ok_or_else(|| CoercionError::UnexpectedShape {
        field: "score",
        found: value.map(describe).unwrap_or_default(),
    })?;

    if !score.is_finite() {
        return Err(CoercionError::NotFinite {
            field: "score",
            found: score.to_string(),
        });
    }

    Ok(score.clamp(0.0, MAX_SCORE))
}

fn coerce_text(field: &'static str, value: Option<&Value>) -> Result<Option<String>, CoercionError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(CoercionError::UnexpectedShape {
            field,
            found: describe(other),
        }),
    }
}

/// Accepts a list of strings or a single string. Non-string list items are rendered as JSON.
fn coerce_list(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<Vec<String>>, CoercionError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(vec![s.clone()])),
        Some(Value::Array(items)) => Ok(Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )),
        Some(other) => Err(CoercionError::UnexpectedShape {
            field,
            found: describe(other),
        }),
    }
}

/// Evaluates one answer. Only a failed generation call is an error.
pub async fn evaluate_answer(
    llm: &dyn GenerationService,
    request: &AnswerEvaluationRequest,
) -> Result<InterviewFeedback, LlmError> {
    info!(
        "Evaluating answer for role={} difficulty={}: {} chars",
        request.role,
        request.difficulty,
        request.answer.chars().count()
    );

    let prompt = build_evaluation_prompt(
        &request.question,
        &request.answer,
        &request.role,
        &request.difficulty,
    );
    let text = generate_text(llm, GenerationRequest::Prompt(prompt)).await?;

    let feedback = recover::<InterviewFeedback>(&text);
    info!("Answer scored {:.1}/10", feedback.score);

    Ok(feedback)
}
