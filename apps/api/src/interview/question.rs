//! Interview question orchestrator.

use tracing::{info, warn};

use crate::interview::models::InterviewQuestionRequest;
use crate::interview::prompts::build_question_prompt;
use crate::llm_client::types::GenerationRequest;
use crate::llm_client::{generate_text, GenerationService, LlmError};

pub const FALLBACK_QUESTION: &str =
    "Tell me about a challenging project you worked on and how you approached it.";

/// Generates the next interview question. Uniqueness against `previous_questions`
/// is requested in the prompt, not verified here.
pub async fn generate_question(
    llm: &dyn GenerationService,
    request: &InterviewQuestionRequest,
) -> Result<String, LlmError> {
    info!(
        "Generating interview question {} for role={} difficulty={} (avoiding {} previous)",
        request.question_number,
        request.role,
        request.difficulty,
        request.previous_questions.len()
    );

    let prompt = build_question_prompt(
        &request.role,
        &request.difficulty,
        request.question_number,
        &request.previous_questions,
    );
    let text = generate_text(llm, GenerationRequest::Prompt(prompt)).await?;

    let question = text.trim();
    if question.is_empty() {
        warn!("Gemini returned no question text; using fallback question");
        return Ok(FALLBACK_QUESTION.to_string());
    }

    Ok(question.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::MockGenerationService;

    fn request(previous: &[&str]) -> InterviewQuestionRequest {
        InterviewQuestionRequest {
            role: "frontend".to_string(),
            difficulty: "intermediate".to_string(),
            question_number: previous.len() as u32 + 1,
            previous_questions: previous.iter().map(|q| q.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_question_is_trimmed() {
        let llm = MockGenerationService::new()
            .with_reply("\n  How does the virtual DOM reduce re-render cost?  \n");
        let question = generate_question(&llm, &request(&[])).await.unwrap();
        assert_eq!(question, "How does the virtual DOM reduce re-render cost?");
    }

    #[tokio::test]
    async fn test_empty_reply_uses_fallback_question() {
        let llm = MockGenerationService::new();
        let question = generate_question(&llm, &request(&[])).await.unwrap();
        assert_eq!(question, FALLBACK_QUESTION);
    }

    #[tokio::test]
    async fn test_whitespace_reply_uses_fallback_question() {
        let llm = MockGenerationService::new().with_reply("   \n ");
        let question = generate_question(&llm, &request(&[])).await.unwrap();
        assert_eq!(question, FALLBACK_QUESTION);
    }

    #[tokio::test]
    async fn test_previous_questions_reach_the_prompt() {
        let llm = MockGenerationService::new().with_reply("Q3");
        generate_question(&llm, &request(&["Q1", "Q2"])).await.unwrap();

        let prompt = llm.requests()[0].flattened_text();
        assert!(prompt.contains("Frontend Developer"));
        assert!(prompt.contains("1. Q1\n2. Q2"));
    }

    #[tokio::test]
    async fn test_generation_failure_is_propagated() {
        let llm = MockGenerationService::new().with_failure(500, "internal");
        assert!(generate_question(&llm, &request(&[])).await.is_err());
    }
}
