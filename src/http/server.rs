//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the relay router with the standard middleware stack
//! - Bind to a listener and serve until the shutdown signal fires
//!
//! # Design Decisions
//! - No request timeout layer: long-running upstream calls are allowed to
//!   take as long as the client is willing to wait
//! - Graceful shutdown is externally driven so tests and binaries share the
//!   same entry path
//! - The dev proxy gets the same server plus one diagnostic logging layer

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::handlers::{relay_router, RelayState};
use crate::http::middleware::request_log::log_inbound;
use crate::http::request::RequestIdLayer;

/// HTTP server hosting the relay.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
}

impl RelayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        Self::build(config, false)
    }

    /// Create a server that additionally logs every inbound request.
    pub fn with_diagnostics(config: RelayConfig) -> Self {
        Self::build(config, true)
    }

    fn build(config: RelayConfig, diagnostics: bool) -> Self {
        let state = RelayState::from_config(&config);
        let mut router = relay_router(state);
        if diagnostics {
            router = router.layer(axum::middleware::from_fn(log_inbound));
        }
        // Request IDs are assigned outermost so the diagnostics and trace
        // layers both see them.
        let router = router
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http());
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.origin,
            "Relay server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("Relay server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
