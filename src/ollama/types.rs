use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Envelope returned by `POST /api/generate` with streaming disabled.
///
/// Every field is optional on the wire; [`GenerateResponse::into_completion`]
/// turns a missing completion into a typed error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Nanoseconds.
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// A validated completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub model: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub total_duration_ns: Option<u64>,
}

impl GenerateResponse {
    pub fn into_completion(self) -> Result<Completion> {
        let text = match self.response {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(Error::invalid_response("missing completion text")),
        };

        Ok(Completion {
            text,
            model: self.model,
            created_at: self.created_at,
            total_duration_ns: self.total_duration,
        })
    }
}

impl Completion {
    pub fn duration_secs(&self) -> Option<f64> {
        self.total_duration_ns.map(|ns| ns as f64 / 1e9)
    }
}
