use async_trait::async_trait;
use slang_translator::{
    Error, Result,
    ollama::{GenerateRequest, GenerateResponse, InferenceClient},
};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// What the mock answers with once it is allowed to respond.
#[derive(Debug, Clone)]
pub enum MockReply {
    Envelope(GenerateResponse),
    ConnectionRefused,
    HttpStatus(u16),
}

/// Mock inference client for testing
#[derive(Debug, Default)]
pub struct MockInferenceClient {
    pub replies: Mutex<Vec<MockReply>>,
    pub requests: Mutex<Vec<GenerateRequest>>,
    /// When set, every call waits for a permit before replying.
    pub gate: Option<Arc<Notify>>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    pub fn with_completion(self, text: &str) -> Self {
        self.with_reply(MockReply::Envelope(create_envelope(text)))
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(Error::invalid_response("No more mock replies available"));
            }
            replies.remove(0)
        };

        match reply {
            MockReply::Envelope(envelope) => Ok(envelope),
            MockReply::ConnectionRefused => Err(Error::connection("connection refused")),
            MockReply::HttpStatus(status) => Err(Error::HttpStatus { status }),
        }
    }
}

/// Envelope shaped like a real non-streaming Ollama reply.
pub fn create_envelope(text: &str) -> GenerateResponse {
    GenerateResponse {
        response: Some(text.to_string()),
        model: Some("llama2".to_string()),
        created_at: "2024-05-01T12:00:00Z".parse().ok(),
        total_duration: Some(2_500_000_000),
        done: Some(true),
    }
}
