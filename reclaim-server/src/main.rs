//! Reclaim Server - REST API for the lost-and-found report registry
//!
//! Exposes the reclaim-core registry via HTTP endpoints:
//! - POST /api/v1/reports - Submit a lost or found report
//! - POST /api/v1/reports/{id}/scan - Run the match scan
//! - POST /api/v1/claims - Initiate a claim over a matched pair
//! - POST /api/v1/handovers - Confirm the physical handover
//! - GET /api/v1/events - Poll the notification stream

use std::sync::Arc;

use reclaim_core::DigestMixScorer;
use reclaim_server::{create_router_with_config, AppState, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // The placeholder scorer keeps the registry self-contained; deployments
    // with a real embedding service consume the event stream instead.
    let state = AppState::new(Arc::new(DigestMixScorer));
    let app = create_router_with_config(&config, state);

    let addr = config.socket_addr();
    tracing::info!(%addr, "Reclaim registry listening");
    tracing::info!("API docs at http://{addr}/docs");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Resolve on SIGINT or SIGTERM so in-flight requests can drain.
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
