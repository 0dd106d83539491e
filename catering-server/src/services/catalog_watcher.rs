//! Catalog subscription
//!
//! Decouples the catalog from any specific transport: pushes arrive as
//! full dish lists on an mpsc channel and are applied through
//! [`CatalogService::replace`]. The HTTP PUT endpoint feeds the same
//! channel a remote store subscription would.

use super::catalog::CatalogService;
use async_trait::async_trait;
use shared::models::Dish;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Pull-side catalog collaborator (remote store, fixture, ...)
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<Dish>>;
}

/// Catalog source backed by an HTTP endpoint returning a JSON dish list
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> anyhow::Result<Vec<Dish>> {
        let dishes = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Dish>>()
            .await?;
        Ok(dishes)
    }
}

/// Background task applying pushed catalog replacements
pub struct CatalogWatcher {
    catalog: CatalogService,
    rx: mpsc::Receiver<Vec<Dish>>,
    shutdown: CancellationToken,
}

impl CatalogWatcher {
    pub fn new(
        catalog: CatalogService,
        rx: mpsc::Receiver<Vec<Dish>>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            catalog,
            rx,
            shutdown,
        }
    }

    /// Run until the channel closes or shutdown is requested
    pub async fn run(mut self) {
        tracing::debug!("CatalogWatcher started");
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    break;
                }
                update = self.rx.recv() => {
                    match update {
                        Some(dishes) => {
                            self.catalog.replace(dishes);
                        }
                        None => break,
                    }
                }
            }
        }
        tracing::info!("CatalogWatcher stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::default_catalog;

    #[tokio::test]
    async fn test_watcher_applies_pushed_update() {
        let catalog = CatalogService::new();
        let (tx, rx) = mpsc::channel(4);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(
            CatalogWatcher::new(catalog.clone(), rx, shutdown.clone()).run(),
        );

        let menu = vec![default_catalog().remove(0)];
        tx.send(menu.clone()).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(catalog.dishes(), menu);
    }

    #[tokio::test]
    async fn test_watcher_ignores_empty_update() {
        let catalog = CatalogService::new();
        let (tx, rx) = mpsc::channel(4);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(
            CatalogWatcher::new(catalog.clone(), rx, shutdown.clone()).run(),
        );

        tx.send(Vec::new()).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(catalog.dishes(), default_catalog());
    }

    #[tokio::test]
    async fn test_watcher_stops_on_cancellation() {
        let catalog = CatalogService::new();
        let (_tx, rx) = mpsc::channel::<Vec<Dish>>(4);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(
            CatalogWatcher::new(catalog.clone(), rx, shutdown.clone()).run(),
        );

        shutdown.cancel();
        handle.await.unwrap();
    }
}
