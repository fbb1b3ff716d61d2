pub mod handlers;
mod page;
pub mod types;

use crate::{Result, config::Config, ollama::OllamaClient};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit_form))
        .route("/api/options", get(handlers::options))
        .route("/api/form", get(handlers::form_state))
        .route("/api/translate", post(handlers::translate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = OllamaClient::new(&config.ollama);
    info!("Using inference endpoint {}", client.endpoint());

    let app_state = AppState::new(Arc::new(client), config.translation.parser);
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
