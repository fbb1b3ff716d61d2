pub mod config;
pub mod error;
pub mod logging;
pub mod ollama;
pub mod server;
pub mod translation;

pub use error::{CONNECTION_GUIDANCE, Error, GENERIC_FAILURE, Result};
