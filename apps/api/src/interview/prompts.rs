// All LLM prompt constants for the interview module.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Human-readable label for an interview role code. Unknown codes are shown unchanged.
pub fn role_label(role: &str) -> &str {
    match role {
        "frontend" => "Frontend Developer",
        "backend" => "Backend Developer",
        "fullstack" => "Full Stack Developer",
        "data-science" => "Data Scientist",
        "mobile" => "Mobile Developer",
        "devops" => "DevOps Engineer",
        "ui-ux" => "UI/UX Designer",
        "product-manager" => "Product Manager",
        other => other,
    }
}

/// Calibration text for a difficulty tier. Unrecognized tiers get the intermediate guidance.
pub fn difficulty_guidance(difficulty: &str) -> &'static str {
    match difficulty.trim().to_ascii_lowercase().as_str() {
        "beginner" => {
            "Beginner level: ask about basic concepts and fundamentals. \
            The question should be answerable by someone early in their career, \
            without deep production experience."
        }
        "advanced" => {
            "Advanced level: ask about complex scenarios, system design, trade-offs \
            and architecture decisions. Expect depth, edge cases and experience \
            leading technical work."
        }
        _ => {
            "Intermediate level: ask practical, experience-based questions about \
            applying the core skills of the role in real projects and debugging \
            everyday problems."
        }
    }
}

const QUESTION_PROMPT_TEMPLATE: &str = r#"You are an experienced technical interviewer conducting a mock interview for a {role} position.

Generate interview question number {question_number}.

Difficulty: {difficulty}
{guidance}
{previous_block}
Requirements:
- Ask exactly ONE question.
- The question must be specific to the {role} role.
- The question must be different from every previously asked question.
- Return ONLY the question text, with no numbering, preamble or explanation."#;

/// Builds the question generation prompt.
pub fn build_question_prompt(
    role: &str,
    difficulty: &str,
    question_number: u32,
    previous_questions: &[String],
) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{role}", role_label(role))
        .replace("{question_number}", &question_number.to_string())
        .replace("{difficulty}", difficulty)
        .replace("{guidance}", difficulty_guidance(difficulty))
        .replace("{previous_block}", &previous_questions_block(previous_questions))
}

/// Enumerated "do not repeat" list, or an empty line when there is nothing to avoid.
fn previous_questions_block(previous_questions: &[String]) -> String {
    if previous_questions.is_empty() {
        return String::new();
    }

    let listed = previous_questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n");

    format!("\nPreviously asked questions (do NOT repeat these or ask close variations):\n{listed}\n")
}

const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are an experienced interviewer evaluating a candidate's answer in a mock interview.

Role: {role}
Difficulty: {difficulty}

Question:
{question}

Candidate's answer:
{answer}

Score the answer from 0 to 10 using this rubric:
- 0-2 (Poor): off-topic, incorrect, or no meaningful answer.
- 3-4 (Weak): partially relevant but with major gaps or errors.
- 5-6 (Fair): correct basics but lacking depth, structure or examples.
- 7-8 (Good): accurate, well structured, with relevant examples.
- 9-10 (Excellent): thorough, insightful, with strong examples and clear trade-offs.
Calibrate expectations to the difficulty level.

Return a JSON object with exactly these keys:
{
  "score": number between 0 and 10,
  "feedback": "2-3 sentences of overall feedback",
  "strengths": ["2-3 specific strengths"],
  "improvements": ["2-3 specific, actionable improvements"]
}

{json_only}"#;

/// Builds the answer evaluation prompt.
pub fn build_evaluation_prompt(question: &str, answer: &str, role: &str, difficulty: &str) -> String {
    // Caller text is substituted from the bottom of the template up, one match each,
    // so placeholder-like text inside an answer can never be expanded.
    EVALUATION_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replacen("{answer}", answer, 1)
        .replacen("{question}", question, 1)
        .replacen("{difficulty}", difficulty, 1)
        .replacen("{role}", role_label(role), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role_codes_map_to_labels() {
        assert_eq!(role_label("frontend"), "Frontend Developer");
        assert_eq!(role_label("data-science"), "Data Scientist");
        assert_eq!(role_label("product-manager"), "Product Manager");
    }

    #[test]
    fn test_unknown_role_code_passes_through() {
        assert_eq!(role_label("site-reliability"), "site-reliability");
    }

    #[test]
    fn test_difficulty_guidance_tiers_differ() {
        let beginner = difficulty_guidance("beginner");
        let intermediate = difficulty_guidance("intermediate");
        let advanced = difficulty_guidance("Advanced");
        assert!(beginner.contains("fundamentals"));
        assert!(intermediate.contains("practical"));
        assert!(advanced.contains("system design"));
        assert_eq!(difficulty_guidance("expert"), intermediate);
    }

    #[test]
    fn test_question_prompt_uses_label_index_and_guidance() {
        let prompt = build_question_prompt("devops", "beginner", 4, &[]);
        assert!(prompt.contains("DevOps Engineer position"));
        assert!(prompt.contains("question number 4"));
        assert!(prompt.contains("fundamentals"));
        assert!(!prompt.contains("do NOT repeat"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_question_prompt_enumerates_previous_questions() {
        let previous = vec!["Q1".to_string(), "Q2".to_string()];
        let prompt = build_question_prompt("backend", "intermediate", 3, &previous);

        let block_start = prompt.find("do NOT repeat").unwrap();
        let block = &prompt[block_start..];
        assert!(block.contains("1. Q1\n2. Q2"));
    }

    #[test]
    fn test_question_prompt_unknown_role_passes_through() {
        let prompt = build_question_prompt("blockchain", "advanced", 1, &[]);
        assert!(prompt.contains("blockchain position"));
    }

    #[test]
    fn test_evaluation_prompt_embeds_inputs_and_rubric() {
        let prompt = build_evaluation_prompt(
            "What is ownership?",
            "Each value has one owner.",
            "backend",
            "beginner",
        );
        assert!(prompt.contains("What is ownership?"));
        assert!(prompt.contains("Each value has one owner."));
        assert!(prompt.contains("Backend Developer"));
        assert!(prompt.contains("Difficulty: beginner"));
        for band in ["(Poor)", "(Weak)", "(Fair)", "(Good)", "(Excellent)"] {
            assert!(prompt.contains(band), "missing rubric band {band}");
        }
        for key in ["\"score\"", "\"feedback\"", "\"strengths\"", "\"improvements\""] {
            assert!(prompt.contains(key), "missing key {key}");
        }
        assert!(prompt.contains("Return ONLY the JSON object"));
    }

    #[test]
    fn test_evaluation_prompt_keeps_placeholder_text_in_answer() {
        let prompt =
            build_evaluation_prompt("Q?", "I would use {question} here", "mobile", "advanced");
        assert!(prompt.contains("Question:\nQ?\n"));
        assert!(prompt.contains("I would use {question} here"));
        assert!(prompt.contains("Role: Mobile Developer"));
    }
}
