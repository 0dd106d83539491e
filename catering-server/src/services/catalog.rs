//! Catalog Service - dish catalog with in-memory caching
//!
//! The working catalog starts as the built-in default menu and is replaced
//! wholesale by any non-empty update, whether pulled from a
//! [`CatalogSource`](super::CatalogSource) at startup or pushed through
//! the watcher. Empty updates are ignored so a misbehaving source can
//! never leave the wizard without dishes.

use super::catalog_watcher::CatalogSource;
use parking_lot::RwLock;
use shared::models::{Dish, default_catalog};
use std::sync::Arc;

/// Dish catalog with in-memory cache
#[derive(Clone)]
pub struct CatalogService {
    dishes: Arc<RwLock<Vec<Dish>>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.dishes.read().len();
        f.debug_struct("CatalogService")
            .field("dishes_count", &count)
            .finish()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService {
    /// Create a catalog seeded with the built-in default menu
    pub fn new() -> Self {
        Self {
            dishes: Arc::new(RwLock::new(default_catalog())),
        }
    }

    /// Create a catalog with explicit contents (tests, fixtures)
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        Self {
            dishes: Arc::new(RwLock::new(dishes)),
        }
    }

    /// Pull the initial catalog from a source, falling back to the
    /// built-in menu on error or empty response
    pub async fn warmup(&self, source: &dyn CatalogSource) {
        match source.load().await {
            Ok(dishes) if !dishes.is_empty() => {
                let count = dishes.len();
                *self.dishes.write() = dishes;
                tracing::info!(count, "CatalogService: loaded catalog from source");
            }
            Ok(_) => {
                tracing::warn!("CatalogService: source returned no dishes, keeping built-in menu");
            }
            Err(e) => {
                tracing::warn!(error = %e, "CatalogService: source unavailable, keeping built-in menu");
            }
        }
    }

    /// Current dish list
    pub fn dishes(&self) -> Vec<Dish> {
        self.dishes.read().clone()
    }

    /// Look up a dish by id
    pub fn find(&self, dish_id: &str) -> Option<Dish> {
        self.dishes.read().iter().find(|d| d.id == dish_id).cloned()
    }

    /// Apply a full catalog replacement
    ///
    /// Empty updates are ignored and leave the working catalog untouched;
    /// returns whether the update was applied.
    pub fn replace(&self, dishes: Vec<Dish>) -> bool {
        if dishes.is_empty() {
            tracing::warn!("CatalogService: ignoring empty catalog update");
            return false;
        }
        let count = dishes.len();
        *self.dishes.write() = dishes;
        tracing::info!(count, "CatalogService: catalog replaced");
        true
    }

    pub fn len(&self) -> usize {
        self.dishes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSource(Vec<Dish>);

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn load(&self) -> anyhow::Result<Vec<Dish>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn load(&self) -> anyhow::Result<Vec<Dish>> {
            anyhow::bail!("connection refused")
        }
    }

    #[test]
    fn test_seeded_with_default_menu() {
        let catalog = CatalogService::new();
        assert_eq!(catalog.len(), default_catalog().len());
        assert!(catalog.find("1").is_some());
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_replace_ignores_empty_update() {
        let catalog = CatalogService::new();
        let before = catalog.dishes();
        assert!(!catalog.replace(Vec::new()));
        assert_eq!(catalog.dishes(), before);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let catalog = CatalogService::new();
        let single = vec![default_catalog().remove(2)];
        assert!(catalog.replace(single.clone()));
        assert_eq!(catalog.dishes(), single);
    }

    #[tokio::test]
    async fn test_warmup_applies_non_empty_source() {
        let catalog = CatalogService::new();
        let menu = vec![default_catalog().remove(1)];
        catalog.warmup(&FixedSource(menu.clone())).await;
        assert_eq!(catalog.dishes(), menu);
    }

    #[tokio::test]
    async fn test_warmup_falls_back_on_empty_source() {
        let catalog = CatalogService::new();
        catalog.warmup(&FixedSource(Vec::new())).await;
        assert_eq!(catalog.dishes(), default_catalog());
    }

    #[tokio::test]
    async fn test_warmup_falls_back_on_failing_source() {
        let catalog = CatalogService::new();
        catalog.warmup(&FailingSource).await;
        assert_eq!(catalog.dishes(), default_catalog());
    }
}
