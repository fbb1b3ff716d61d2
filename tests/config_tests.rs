use pretty_assertions::assert_eq;
use slang_translator::{
    Error,
    config::{self, Config},
    translation::ParseStrategy,
};

mod common;
use common::{
    INVALID_CONFIG_YAML, PARTIAL_CONFIG_YAML, SAMPLE_CONFIG_YAML, create_temp_dir,
    create_test_config_file,
};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "info");
    assert_eq!(config.ollama.base_url, "http://localhost:11434");
    assert_eq!(config.translation.parser, ParseStrategy::Auto);
}

#[tokio::test]
async fn test_load_full_config() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, SAMPLE_CONFIG_YAML)
        .await
        .unwrap();

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.ollama.base_url, "http://gpu-box:11434");
    assert_eq!(config.translation.parser, ParseStrategy::LineSplit);
}

#[tokio::test]
async fn test_load_partial_config_fills_defaults() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, PARTIAL_CONFIG_YAML)
        .await
        .unwrap();

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.ollama.base_url, "http://localhost:11500");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.translation.parser, ParseStrategy::Auto);
}

#[tokio::test]
async fn test_load_invalid_config() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, INVALID_CONFIG_YAML)
        .await
        .unwrap();

    let err = config::load_from(&path).await.unwrap_err();
    assert!(matches!(err, Error::Yaml(_)));
}

#[tokio::test]
async fn test_load_empty_base_url_rejected() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, "ollama:\n  base_url: \"\"\n")
        .await
        .unwrap();

    let err = config::load_from(&path).await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("absent.yaml");

    let err = config::load_from(&path.to_string_lossy())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
