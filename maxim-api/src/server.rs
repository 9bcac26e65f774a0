//! API server implementation.
//!
//! Binds the configured address and serves the router until the process
//! exits or the shutdown future resolves.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use maxim_core::QuoteCatalog;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::routes::create_router;
use crate::state::AppState;

/// API server.
pub struct ApiServer {
    /// Server configuration
    config: ApiConfig,
    /// Application state
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server over the given catalog.
    #[must_use]
    pub fn new(config: ApiConfig, catalog: QuoteCatalog) -> Self {
        let state = Arc::new(AppState::new(config.clone(), catalog));
        Self { config, state }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Runs the API server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or run.
    pub async fn run(self) -> Result<(), ApiError> {
        let (listener, app) = self.bind().await?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::Internal(format!("Server error: {e}")))?;

        Ok(())
    }

    /// Runs the API server with graceful shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or run.
    pub async fn run_with_shutdown(
        self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), ApiError> {
        let (listener, app) = self.bind().await?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ApiError::Internal(format!("Server error: {e}")))?;

        warn!("API server shutting down");

        Ok(())
    }

    /// Binds the listener and assembles the router with its middleware.
    async fn bind(&self) -> Result<(TcpListener, axum::Router), ApiError> {
        let addr = self.config.bind_address();

        let mut app = create_router(self.state.clone());
        if self.config.enable_request_logging {
            app = app.layer(TraceLayer::new_for_http());
        }

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| ApiError::Internal(format!("Invalid bind address: {e}")))?;

        let listener = TcpListener::bind(socket_addr)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to bind to {addr}: {e}")))?;

        info!("API server listening on {}", addr);

        Ok((listener, app))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxim_core::Dataset;

    fn catalog() -> QuoteCatalog {
        QuoteCatalog::new(Dataset::load().unwrap())
    }

    #[test]
    fn test_api_server_new() {
        let server = ApiServer::new(ApiConfig::default(), catalog());
        assert!(!server.state().catalog.is_empty());
    }

    #[tokio::test]
    async fn test_bind_rejects_invalid_address() {
        let config = ApiConfig {
            host: "not an address".to_string(),
            ..Default::default()
        };
        let server = ApiServer::new(config, catalog());
        assert!(server.run().await.is_err());
    }
}
