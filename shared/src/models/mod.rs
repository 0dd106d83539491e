//! Domain models
//!
//! - [`Dish`] / [`IngredientRequirement`] - catalog entries
//! - [`CustomerParams`] - free-form customer fields with read-time coercion

pub mod customer;
pub mod dish;

pub use customer::CustomerParams;
pub use dish::{Dish, DishCategory, IngredientRequirement, default_catalog};
