use crate::translation::{ModelChoice, Register, TranslationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON body of `POST /api/translate`.
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source: Register,
    pub target: Register,
    #[serde(default)]
    pub model: Option<ModelChoice>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub context: String,
    pub model: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub duration_secs: Option<f64>,
}

impl From<TranslationResult> for TranslateResponse {
    fn from(result: TranslationResult) -> Self {
        Self {
            translation: result.translation,
            context: result.context,
            model: result.model,
            created_at: result.created_at,
            duration_secs: result.duration_secs,
        }
    }
}

/// Form-encoded body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub text: String,
    pub source: Register,
    pub target: Register,
    #[serde(default)]
    pub model: ModelChoice,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub registers: Vec<Register>,
    pub models: Vec<ModelChoice>,
    pub default_source: Register,
    pub default_target: Register,
    pub default_model: ModelChoice,
}

impl Default for OptionsResponse {
    fn default() -> Self {
        Self {
            registers: Register::ALL.to_vec(),
            models: ModelChoice::ALL.to_vec(),
            default_source: Register::default_source(),
            default_target: Register::default_target(),
            default_model: ModelChoice::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
