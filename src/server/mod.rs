//! HTTP check server.
//!
//! Provides three endpoints:
//! - `/check/{domain}` - check one name, CSV response
//! - `/upload` - check an uploaded CSV name list, streamed CSV response
//! - `/form` - upload form and FAQ
//!
//! Every request opens and releases its own resolver session.

mod handlers;
mod types;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::resolver::ResolverConnector;
use handlers::{check_handler, form_handler, upload_handler};
pub use types::{AppState, CSV_CONTENT_TYPE};

/// Builds the router with all check endpoints.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/check/{domain}", get(check_handler))
        .route("/upload", post(upload_handler))
        .route("/form", get(form_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Creates and starts the check server; returns after a Ctrl-C shutdown.
pub async fn start_server(
    config: ServerConfig,
    connector: Arc<dyn ResolverConnector>,
) -> Result<(), anyhow::Error> {
    let state = AppState::new(connector, config.session.clone(), config.batch.clone());
    let app = router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", config.listen, e))?;

    log::info!("Check server listening on http://{}/", config.listen);
    log::info!("  - Single name: http://{}/check/<domain>", config.listen);
    log::info!("  - Upload form: http://{}/form", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Check server error: {}", e))?;

    log::info!("Check server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            log::error!("Cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::stub::StubConnector;

    #[tokio::test]
    async fn test_start_server_port_binding_failure() {
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServerConfig {
            listen: occupied.local_addr().unwrap(),
            ..ServerConfig::default()
        };
        let err = start_server(config, Arc::new(StubConnector::new()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to bind server"));
    }
}
