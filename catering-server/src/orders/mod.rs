//! Order aggregation for the catering wizard
//!
//! - **engine**: rolls an order book up into the procurement/cost summary
//! - **cache**: content-hash memoization of the summary
//! - **wizard**: the four-stage wizard state machine
//!
//! # Data flow
//!
//! ```text
//! API mutation -> OrderBook -> compute_summary -> Summary -> report view
//! ```
//!
//! The engine is pure: identical book state always yields an identical
//! summary, and it is safe to recompute on every read.

pub mod cache;
pub mod engine;
pub mod wizard;

// Re-exports
pub use cache::SummaryCache;
pub use engine::compute_summary;
pub use wizard::WizardStage;

// Re-export shared types for convenience
pub use shared::order::{IngredientTotal, OrderBook, OrderedDish, Summary, VendorGroup};
