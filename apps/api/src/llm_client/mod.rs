/// LLM Client: the single point of entry for all Gemini calls in the coach API.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Orchestrators depend on the `GenerationService` trait, never on `GeminiClient`.
///
/// There is deliberately no retry loop: a failed call is reported to the caller at once.
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, warn};

pub mod output;
pub mod prompts;
pub mod structured;
pub mod types;

#[cfg(test)]
pub mod mock;

use crate::config::Config;
use crate::llm_client::output::extract_text;
use crate::llm_client::types::{GenerateContentRequest, GenerateContentResponse, GenerationRequest};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The generation backend seen by the orchestrators.
///
/// Carried in `AppState` as `Arc<dyn GenerationService>`.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Model identifier, for logging and the health endpoint.
    fn model(&self) -> &str;

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerateContentResponse, LlmError>;
}

/// Generates and extracts the reply text. `""` means the model produced nothing usable.
pub async fn generate_text(
    llm: &dyn GenerationService,
    request: GenerationRequest,
) -> Result<String, LlmError> {
    let response = llm.generate(request).await?;

    if let Some(usage) = &response.usage_metadata {
        debug!(
            "Gemini call succeeded: prompt_tokens={}, candidate_tokens={}, total_tokens={}",
            usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
        );
    }

    let text = extract_text(&response);
    if text.is_empty() {
        warn!(
            "Gemini returned no text (candidates={}, finish_reason={:?})",
            response.candidates.len(),
            response.finish_reason()
        );
    }

    Ok(text)
}

#[derive(Debug, serde::Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.strip_prefix("models/").unwrap_or(model).to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            &config.gemini_model,
            &config.gemini_base_url,
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: request.into_contents(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Gemini: {e}");
                e
            })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::types::Content;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-2.0-flash";
    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    fn client_for(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(api_key.map(String::from), MODEL, &server.uri())
    }

    #[test]
    fn test_model_prefix_is_stripped() {
        let client = GeminiClient::new(None, "models/gemini-2.0-flash", "http://localhost/");
        assert_eq!(client.model(), MODEL);
        assert_eq!(
            client.endpoint(),
            "http://localhost/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_posts_contents_and_parses_reply() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_json(serde_json::json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "Hi"}]},
                    {"role": "model", "parts": [{"text": "Hello"}]},
                    {"role": "user", "parts": [{"text": "How are you?"}]}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Fine, "}, {"text": "thanks."}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 9, "candidatesTokenCount": 3, "totalTokenCount": 12}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-key"));
        let request = GenerationRequest::Contents(vec![
            Content::user("Hi"),
            Content::text("model", "Hello"),
            Content::user("How are you?"),
        ]);

        let text = generate_text(&client, request).await.unwrap();
        assert_eq!(text, "Fine, thanks.");
    }

    #[tokio::test]
    async fn test_prompt_is_sent_as_single_user_turn() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_json(serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "Summarize"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("k"));
        let text = generate_text(&client, GenerationRequest::Prompt("Summarize".into()))
            .await
            .unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_api_error_surfaces_gemini_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("bad-key"));
        let err = client
            .generate(GenerationRequest::Prompt("x".into()))
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("k"));
        let err = client
            .generate(GenerationRequest::Prompt("x".into()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("overloaded"));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_sending() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .generate(GenerationRequest::Prompt("x".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
