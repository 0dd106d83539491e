//! Summary types
//!
//! The derived, recomputable report of total cost and vendor-grouped
//! ingredient totals for an entire order book. Produced by the aggregation
//! engine; never stored.

use serde::{Deserialize, Serialize};

/// Accumulated requirement for one `(ingredient, vendor)` pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientTotal {
    pub item: String,
    pub vendor: String,
    /// Unit of measure, recorded from the first occurrence of the pair
    pub unit: String,
    /// Total quantity across all sessions, already scaled by table count
    pub total: f64,
}

/// Ingredient totals grouped by supplying vendor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorGroup {
    pub vendor: String,
    pub ingredients: Vec<IngredientTotal>,
}

/// Consolidated procurement and cost report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// All ingredient totals in first-seen order
    pub ingredients: Vec<IngredientTotal>,
    /// The same totals grouped by vendor, groups in first-seen vendor
    /// order, per-vendor order preserved
    pub vendors: Vec<VendorGroup>,
    /// Total cost across all sessions: sum of dish cost x table count
    pub total_cost: f64,
}

impl Summary {
    /// The summary of an empty order book
    pub fn empty() -> Self {
        Self {
            ingredients: Vec::new(),
            vendors: Vec::new(),
            total_cost: 0.0,
        }
    }
}
