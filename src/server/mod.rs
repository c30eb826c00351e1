//! HTTP classification server.
//!
//! Provides two endpoints:
//! - `POST /classify` - fetch a domain's homepage and report embedded vendors
//! - `GET /health` - liveness probe with the configured vendor count

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;

use crate::detector::Detector;
use handlers::{classify_handler, health_handler};
pub use types::{ClassifyRequest, ErrorBody, HealthResponse, RequestRejection};

/// Builds the router with all routes bound to `detector`.
pub fn router(detector: Detector) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/health", get(health_handler))
        .with_state(detector)
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn start_server(addr: SocketAddr, detector: Detector) -> Result<(), anyhow::Error> {
    let app = router(detector);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Server listening on http://{}/", addr);
    log::info!("  - Classify: POST http://{}/classify", addr);
    log::info!("  - Health: GET http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving instead of shutting down at once.
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
