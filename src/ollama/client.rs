use super::types::{GenerateRequest, GenerateResponse};
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use tracing::{debug, warn};

pub const GENERATE_PATH: &str = "/api/generate";

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

pub struct OllamaClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Self {
        let endpoint = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            GENERATE_PATH
        );

        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Connection failures get their own variant so the caller can show the
/// "is Ollama running" guidance.
fn classify_transport_error(err: reqwest::Error) -> Error {
    if err.is_connect() {
        Error::connection(err.to_string())
    } else {
        Error::Network(err)
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            "Sending generate request to {} with model {}",
            self.endpoint, request.model
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Inference server responded with {}", status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        let envelope: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| Error::invalid_response(format!("undecodable envelope: {}", e)))?;

        debug!(
            "Received generate response from model {:?} ({} bytes)",
            envelope.model,
            body.len()
        );

        Ok(envelope)
    }
}
