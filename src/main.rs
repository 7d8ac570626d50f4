mod app;
mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use repository::Repository;
use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to load config: {e}");
    });
    tracing::info!("Successfully loaded notes config: {:?}", cfg);

    // In-memory store, gone once the process exits
    let repo_ptr = Arc::new(tokio::sync::Mutex::new(Repository::new()));

    // Service creation
    let service = Arc::new(NoteService::new(repo_ptr, cfg.missing_key));

    let router = app::build_router(service, &cfg);

    let listener = tokio::net::TcpListener::bind(cfg.listen_addr())
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to {}: {e}", cfg.listen_addr());
            panic!("failed to bind to {}: {e}", cfg.listen_addr());
        });
    let addr = listener.local_addr().unwrap_or_else(|e| {
        tracing::error!("Failed to read listener address: {e}");
        panic!("failed to read listener address: {e}");
    });

    tracing::info!("Notes server starting, listening on {}", addr);
    if cfg.swagger_ui {
        tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);
    }

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
