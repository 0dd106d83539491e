//! External collaborator services
//!
//! - **catalog**: in-memory dish catalog with built-in fallback
//! - **catalog_watcher**: push-update subscription applying catalog
//!   replacements
//! - **archive**: fire-and-forget persistence sink for finished orders

pub mod archive;
pub mod catalog;
pub mod catalog_watcher;

pub use archive::{ArchiveSink, ArchiveWorker, FileArchiveSink};
pub use catalog::CatalogService;
pub use catalog_watcher::{CatalogSource, CatalogWatcher, HttpCatalogSource};
