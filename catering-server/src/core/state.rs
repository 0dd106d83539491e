//! Shared application state
//!
//! One state instance corresponds to one wizard run: the working catalog,
//! the order book, the current wizard stage and the channels feeding the
//! background workers. Cloning is cheap; all members are handles.

use super::config::Config;
use crate::orders::{SummaryCache, WizardStage};
use crate::services::{CatalogService, HttpCatalogSource};
use parking_lot::RwLock;
use shared::models::Dish;
use shared::order::{OrderArchive, OrderBook, Summary};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Channel capacity for catalog pushes and archive snapshots
const CHANNEL_CAPACITY: usize = 16;

/// Receiver ends of the background worker channels
///
/// Handed to [`Server`](super::Server), which spawns the workers.
pub struct Channels {
    pub catalog_rx: mpsc::Receiver<Vec<Dish>>,
    pub archive_rx: mpsc::Receiver<OrderArchive>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: CatalogService,
    pub book: Arc<RwLock<OrderBook>>,
    pub wizard: Arc<RwLock<WizardStage>>,
    summary_cache: Arc<SummaryCache>,
    catalog_tx: mpsc::Sender<Vec<Dish>>,
    archive_tx: mpsc::Sender<OrderArchive>,
    /// Identity of this operator session
    pub actor_id: String,
}

impl AppState {
    /// Initialize state for one wizard run, warming the catalog from the
    /// configured source when one is set
    pub async fn initialize(config: &Config) -> (Self, Channels) {
        let catalog = CatalogService::new();
        if let Some(url) = &config.catalog_url {
            let source = HttpCatalogSource::new(url.clone());
            catalog.warmup(&source).await;
        }

        let (catalog_tx, catalog_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (archive_tx, archive_rx) = mpsc::channel(CHANNEL_CAPACITY);

        let state = Self {
            config: Arc::new(config.clone()),
            catalog,
            book: Arc::new(RwLock::new(OrderBook::with_policy(
                config.allow_duplicate_dish,
            ))),
            wizard: Arc::new(RwLock::new(WizardStage::Landing)),
            summary_cache: Arc::new(SummaryCache::new()),
            catalog_tx,
            archive_tx,
            actor_id: Uuid::new_v4().to_string(),
        };

        tracing::info!(actor_id = %state.actor_id, "application state initialized");

        (
            state,
            Channels {
                catalog_rx,
                archive_rx,
            },
        )
    }

    /// Recompute (or reuse) the summary for the current book state
    pub fn summary(&self) -> Summary {
        let book = self.book.read();
        self.summary_cache.get_or_compute(&book)
    }

    /// Push a catalog replacement to the watcher
    ///
    /// Returns whether the update was enqueued.
    pub fn push_catalog(&self, dishes: Vec<Dish>) -> bool {
        match self.catalog_tx.try_send(dishes) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "catalog push channel unavailable");
                false
            }
        }
    }

    /// Snapshot the current book and enqueue it for archival
    ///
    /// Fire-and-forget: a full or closed queue is logged and ignored so
    /// the report stage never blocks on persistence.
    pub fn enqueue_archive(&self) {
        let archive = OrderArchive::from_book(&self.book.read(), self.actor_id.clone());
        if let Err(e) = self.archive_tx.try_send(archive) {
            tracing::warn!(error = %e, "archive queue unavailable, snapshot dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> Config {
        Config {
            work_dir: "/tmp/catering-test".into(),
            http_port: 0,
            environment: "development".into(),
            catalog_url: None,
            allow_duplicate_dish: false,
        }
    }

    #[tokio::test]
    async fn test_initialize_seeds_default_catalog() {
        let (state, _channels) = AppState::initialize(&test_config()).await;
        assert!(!state.catalog.is_empty());
        assert_eq!(*state.wizard.read(), WizardStage::Landing);
        assert_eq!(state.book.read().selection_count(), 0);
    }

    #[tokio::test]
    async fn test_summary_tracks_book_mutations() {
        let (state, _channels) = AppState::initialize(&test_config()).await;
        assert_eq!(state.summary().total_cost, 0.0);

        let dish = state.catalog.find("1").unwrap();
        {
            let mut book = state.book.write();
            book.set_customer_field("tables", json!(10));
            book.add_dish(
                shared::order::SessionKey::new(1, shared::order::MealSlot::Lunch).unwrap(),
                dish,
            );
        }
        assert_eq!(state.summary().total_cost, 1200.0);
    }

    #[tokio::test]
    async fn test_enqueue_archive_reaches_channel() {
        let (state, mut channels) = AppState::initialize(&test_config()).await;
        state
            .book
            .write()
            .set_customer_field("name", json!("Qian"));
        state.enqueue_archive();

        let archive = channels.archive_rx.try_recv().unwrap();
        assert_eq!(archive.customer.name(), "Qian");
        assert_eq!(archive.actor_id, state.actor_id);
    }

    #[tokio::test]
    async fn test_push_catalog_reaches_channel() {
        let (state, mut channels) = AppState::initialize(&test_config()).await;
        assert!(state.push_catalog(Vec::new()));
        assert!(channels.catalog_rx.try_recv().unwrap().is_empty());
    }
}
