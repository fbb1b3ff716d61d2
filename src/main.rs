use anyhow::Result;
use slang_translator::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so it can set the log level
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match logging::build_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting slang translator with log filter: {}",
        rust_log.as_deref().unwrap_or(&config.server.logs.level)
    );

    server::run(config).await?;

    Ok(())
}
