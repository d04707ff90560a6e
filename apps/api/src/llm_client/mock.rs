//! Scripted in-memory generation backend for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::types::{GenerateContentResponse, GenerationRequest};
use crate::llm_client::{GenerationService, LlmError};

enum Scripted {
    Reply(GenerateContentResponse),
    Failure { status: u16, message: String },
}

/// Replays queued replies in order and records every request it receives.
/// With an empty queue it answers with a response that has no candidates.
#[derive(Clone, Default)]
pub struct MockGenerationService {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockGenerationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a single-candidate reply with one text part.
    pub fn with_reply(self, text: &str) -> Self {
        self.with_response(GenerateContentResponse::from_parts([text]))
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Reply(response));
        self
    }

    pub fn with_failure(self, status: u16, message: &str) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Failure {
            status,
            message: message.to_string(),
        });
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationService for MockGenerationService {
    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Reply(response)) => Ok(response),
            Some(Scripted::Failure { status, message }) => Err(LlmError::Api { status, message }),
            None => Ok(GenerateContentResponse::default()),
        }
    }
}
