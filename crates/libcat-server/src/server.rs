use std::sync::Arc;

use libcat_store::{Catalog, JsonFileStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Library catalog HTTP server.
pub struct LibcatServer {
    config: ServerConfig,
    catalog: Arc<Catalog>,
}

impl LibcatServer {
    /// Open the configured data file and build a server over it.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = if config.init_if_missing {
            JsonFileStore::init(&config.data_file)?
        } else {
            JsonFileStore::new(&config.data_file)
        };
        Ok(Self::with_catalog(config, Arc::new(Catalog::with_store(store))))
    }

    /// Build a server over an existing catalog, e.g. one backed by memory.
    pub fn with_catalog(config: ServerConfig, catalog: Arc<Catalog>) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let router = build_router(AppState::new(Arc::clone(&self.catalog)));
        if self.config.enable_cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            data_file = %self.catalog.store().describe(),
            "library catalog listening on http://{}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
