// CV analysis: PDF upload → page text → Gemini skill extraction → CvInsights.
// Extraction failures degrade to a plain summary instead of failing the request.

pub mod analysis;
pub mod handlers;
pub mod pdf;
pub mod prompts;
