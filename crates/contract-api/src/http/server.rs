//! HTTP server implementation

use super::api::build_router;
use super::state::AppState;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// HTTP API server
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves until `shutdown` resolves, then waits for in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.state.config.server.bind_address;
        let router = build_router(self.state);

        let listener = TcpListener::bind(addr).await?;
        info!("HTTP API listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        // Keep serving rather than exit immediately
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
