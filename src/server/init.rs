//! Server initialization and main run loop
//!
//! Contains the main `run()` function that starts the HTTP server.

use super::loader::load_config;
use agora_core::{BallotService, LawStore};
use anyhow::{Context, Result};
use axum::{routing::get, Extension, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

/// Run the server
pub async fn run() -> Result<()> {
    info!("Starting Agora v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;
    info!("Configuration loaded");

    let db_path = config.database.require_path()?;
    info!("Law store: {}", db_path.display());

    let store = LawStore::from_path(&db_path)
        .await
        .context("Failed to open law store")?;
    let service = Arc::new(BallotService::new(store));

    let app = router(service);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    info!("HTTP server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Agora shutdown complete");
    Ok(())
}

/// Build the application router
pub fn router(service: Arc<BallotService>) -> Router {
    let app = Router::new()
        .merge(crate::api::api_router())
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Client pages (law list, law detail, MP dashboard)
    let web_dir = std::path::Path::new("web");
    if web_dir.exists() {
        app.fallback_service(ServeDir::new(web_dir).append_index_html_on_directories(true))
    } else {
        app.route("/", get(|| async { "Agora civic platform" }))
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
