use crate::translation::{ParseError, SubmitRejection};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Shown when the inference server cannot be reached at all.
pub const CONNECTION_GUIDANCE: &str =
    "Unable to connect to Ollama. Please make sure Ollama is running on your computer.";

/// Shown for every other failed translation.
pub const GENERIC_FAILURE: &str = "An error occurred while translating. Please try again.";

pub const CANCELLED_MESSAGE: &str = "The translation was cancelled.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Inference server returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Submission rejected: {0}")]
    Rejected(#[from] SubmitRejection),

    #[error("Translation cancelled")]
    Cancelled,

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Whether the inference server could not be reached.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// The message rendered to the user for this failure.
    ///
    /// Only a connection failure gets specific guidance; every other
    /// translation failure collapses into one generic message and the
    /// detail goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection(_) => CONNECTION_GUIDANCE.to_string(),
            Self::Rejected(rejection) => rejection.message().to_string(),
            Self::Cancelled => CANCELLED_MESSAGE.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
