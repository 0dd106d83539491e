//! The OrderBook: customer parameters plus per-session dish selections
//!
//! The book is the single owned state of a wizard run. It is created empty
//! at wizard start, mutated incrementally through the CustomerInfo and
//! Ordering stages, and archived (externally) after the report stage. A
//! summary is derivable from whatever state currently exists, including an
//! empty book.

use super::session::SessionKey;
use crate::models::{CustomerParams, Dish};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// One selected dish instance within a session
///
/// The dish is snapshotted by value at add time, so later catalog updates
/// never mutate an existing selection. The instance id distinguishes
/// multiple selections of the same dish in one session when duplicates
/// are allowed, and is the precise handle for removal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderedDish {
    /// Per-selection unique id
    pub instance_id: String,
    /// Catalog snapshot taken at add time
    pub dish: Dish,
}

/// Mutable in-memory record of customer parameters and per-session
/// dish selections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    customer: CustomerParams,
    sessions: BTreeMap<SessionKey, Vec<OrderedDish>>,
    /// Duplicate policy: `false` = at most one instance of a dish per
    /// session (adds of an already-present dish are silent no-ops),
    /// `true` = every add appends a distinct instance
    allow_duplicate_dish: bool,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create an empty book with the single-instance policy (at most one
    /// instance of a dish per session)
    pub fn new() -> Self {
        Self::with_policy(false)
    }

    /// Create an empty book with an explicit duplicate policy
    pub fn with_policy(allow_duplicate_dish: bool) -> Self {
        Self {
            customer: CustomerParams::new(),
            sessions: BTreeMap::new(),
            allow_duplicate_dish,
        }
    }

    pub fn allow_duplicate_dish(&self) -> bool {
        self.allow_duplicate_dish
    }

    pub fn customer(&self) -> &CustomerParams {
        &self.customer
    }

    /// Replace a single customer field, leaving siblings untouched
    pub fn set_customer_field(&mut self, field: impl Into<String>, value: Value) {
        self.customer.set_field(field, value);
    }

    /// All sessions in chronological order
    pub fn sessions(&self) -> &BTreeMap<SessionKey, Vec<OrderedDish>> {
        &self.sessions
    }

    /// Ordered dish list for a session; empty for untouched sessions
    pub fn session(&self, key: SessionKey) -> &[OrderedDish] {
        self.sessions.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a dish selection to a session
    ///
    /// Returns the new instance id, or `None` when the add was rejected as
    /// a duplicate under the single-instance policy.
    pub fn add_dish(&mut self, key: SessionKey, dish: Dish) -> Option<String> {
        let list = self.sessions.entry(key).or_default();
        if !self.allow_duplicate_dish && list.iter().any(|d| d.dish.id == dish.id) {
            tracing::debug!(session = %key, dish_id = %dish.id, "duplicate add ignored");
            return None;
        }
        let instance_id = Uuid::new_v4().to_string();
        list.push(OrderedDish {
            instance_id: instance_id.clone(),
            dish,
        });
        Some(instance_id)
    }

    /// Remove exactly one entry from a session
    ///
    /// The selector matches an instance id first, then a dish id; only the
    /// first matching entry is removed. Removing a non-existent entry (or
    /// from an untouched session) is a no-op returning `false`.
    pub fn remove_dish(&mut self, key: SessionKey, selector: &str) -> bool {
        let Some(list) = self.sessions.get_mut(&key) else {
            return false;
        };
        let pos = list
            .iter()
            .position(|d| d.instance_id == selector)
            .or_else(|| list.iter().position(|d| d.dish.id == selector));
        match pos {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Total number of selected dish instances across all sessions
    pub fn selection_count(&self) -> usize {
        self.sessions.values().map(Vec::len).sum()
    }
}
