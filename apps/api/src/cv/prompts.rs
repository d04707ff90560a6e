// All LLM prompt constants for the CV analysis module.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Separates the instructions from the document body.
pub const CV_TEXT_SEPARATOR: &str = "\n\n---\nCV TEXT:\n";

/// CV extraction instructions. The document text is appended after `CV_TEXT_SEPARATOR`.
pub const CV_EXTRACTION_PROMPT: &str = r#"You are an expert CV analyzer. Extract structured career information from the CV text below.

Return a JSON object with this EXACT schema (no extra keys):
{
  "keySkills": ["string"],
  "toolsTechnologies": ["string"],
  "rolesAndDomains": ["string"]
}

Key meanings:
- "keySkills": professional and soft skills the candidate demonstrates (e.g. "API design", "team leadership").
- "toolsTechnologies": named languages, frameworks, tools and platforms (e.g. "Rust", "PostgreSQL", "Figma").
- "rolesAndDomains": job titles held and industry or problem domains worked in (e.g. "Backend Engineer", "Fintech").

Rules:
- Extract only what is explicitly mentioned in the CV. Do NOT infer or invent entries.
- Use an empty array when nothing fits a key."#;

/// Builds the full CV extraction prompt with the document text appended verbatim.
pub fn build_cv_prompt(cv_text: &str) -> String {
    format!("{CV_EXTRACTION_PROMPT}\n- {JSON_ONLY_INSTRUCTION}{CV_TEXT_SEPARATOR}{cv_text}")
}
