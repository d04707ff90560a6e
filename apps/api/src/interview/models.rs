use serde::{Deserialize, Serialize};

/// Request body for question generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionRequest {
    /// Role code such as `backend`; unknown codes are used as the label.
    pub role: String,
    pub difficulty: String,
    /// 1-based position of the question in the session.
    pub question_number: u32,
    /// Questions already asked this session, oldest first.
    #[serde(default)]
    pub previous_questions: Vec<String>,
}

/// Request body for answer evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerEvaluationRequest {
    pub question: String,
    pub answer: String,
    pub role: String,
    pub difficulty: String,
}

/// Scored feedback on one answer. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewFeedback {
    /// 0.0 – 10.0
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}
