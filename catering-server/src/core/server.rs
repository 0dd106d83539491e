//! HTTP server lifecycle
//!
//! Binds the listener, spawns the catalog watcher and archive worker, and
//! serves the API until a shutdown signal arrives. Workers are cancelled
//! through a shared token once the server loop exits.

use super::config::Config;
use super::state::{AppState, Channels};
use crate::services::{ArchiveWorker, CatalogWatcher, FileArchiveSink};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// HTTP server wrapping the application state and background workers
pub struct Server {
    config: Config,
    state: AppState,
    channels: Channels,
}

impl Server {
    pub fn with_state(config: Config, state: AppState, channels: Channels) -> Self {
        Self {
            config,
            state,
            channels,
        }
    }

    /// Run the server until ctrl-c
    pub async fn run(self) -> anyhow::Result<()> {
        let shutdown = CancellationToken::new();

        // Background workers
        let watcher = CatalogWatcher::new(
            self.state.catalog.clone(),
            self.channels.catalog_rx,
            shutdown.child_token(),
        );
        tokio::spawn(watcher.run());

        let sink = Arc::new(FileArchiveSink::new(self.config.archive_dir()));
        let worker = ArchiveWorker::new(sink, self.channels.archive_rx, shutdown.child_token());
        tokio::spawn(worker.run());

        // HTTP API
        let app = crate::api::router(self.state);
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            environment = %self.config.environment,
            "HTTP server listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        shutdown.cancel();
        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
