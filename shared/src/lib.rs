//! Shared types for the catering order system
//!
//! Common types used across crates: the dish catalog model, customer
//! parameters, session-keyed order state, summary types, error types and
//! the API response envelope.

pub mod error;
pub mod models;
pub mod order;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCode};
pub use models::{CustomerParams, Dish, DishCategory, IngredientRequirement, default_catalog};
pub use order::{
    IngredientTotal, MealSlot, OrderArchive, OrderBook, OrderedDish, SessionKey, Summary,
    VendorGroup,
};
pub use response::ApiResponse;
