mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH`, or from `config.yaml` when unset.
///
/// A missing `config.yaml` yields the built-in defaults; a missing file named
/// explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(config_path) => load_from(&config_path).await,
        Err(_) if !Path::new(DEFAULT_CONFIG_PATH).exists() => {
            debug!(
                "No {} found, using default configuration",
                DEFAULT_CONFIG_PATH
            );
            Ok(Config::default())
        }
        Err(_) => load_from(DEFAULT_CONFIG_PATH).await,
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", config_path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    if config.ollama.base_url.trim().is_empty() {
        return Err(Error::config("ollama.base_url must not be empty"));
    }

    Ok(config)
}
