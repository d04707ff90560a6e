// Shared prompt fragments.
// Each use case defines its own prompts.rs alongside it; this file holds the
// instructions more than one of them needs.

/// Closing instruction for prompts whose reply is parsed as a JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY the JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";
