use slang_translator::{
    Result,
    ollama::InferenceClient,
    translation::{ParseStrategy, Register, TranslationForm},
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::fs;

pub const LINE_COMPLETION: &str =
    "1. Translated Phrase: That's really impressive\n2. Context Explanation: \"Slay\" means doing something exceptionally well.";

pub const MARKER_COMPLETION: &str =
    "**Translated Phrase:** Hi there\n**Context Explanation:** casual hello";

/// Form with a translatable phrase already entered (American English -> Gen Z)
pub fn create_ready_form(client: Arc<dyn InferenceClient>) -> TranslationForm {
    let form = TranslationForm::new(client, ParseStrategy::Auto);
    form.set_input("That was amazing");
    form
}

pub fn create_form_with_registers(
    client: Arc<dyn InferenceClient>,
    source: Register,
    target: Register,
) -> TranslationForm {
    let form = create_ready_form(client);
    form.set_source(source);
    form.set_target(target);
    form
}

/// Waits until the form reports a pending submission
pub async fn wait_until_pending(form: &TranslationForm) {
    for _ in 0..200 {
        if matches!(
            form.phase(),
            slang_translator::translation::FormPhase::Pending { .. }
        ) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("form never became pending");
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 9090
  logs:
    level: "debug"

ollama:
  base_url: "http://gpu-box:11434"

translation:
  parser: "line_split"
"#;

/// Only one section present; the rest falls back to defaults
pub const PARTIAL_CONFIG_YAML: &str = r#"
ollama:
  base_url: "http://localhost:11500"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

translation:
  parser: "guess"
"#;
