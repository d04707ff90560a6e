// Mock interview coaching: question generation and answer evaluation.
// Session state (previous questions, scores) lives with the caller.

pub mod evaluation;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod question;
