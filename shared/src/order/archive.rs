//! Order archive snapshot
//!
//! Write-once record handed to the persistence sink after the report
//! stage. The core never reads this data back and never depends on the
//! sink succeeding.

use super::book::{OrderBook, OrderedDish};
use super::session::SessionKey;
use crate::models::CustomerParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of a finished wizard run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderArchive {
    pub customer: CustomerParams,
    pub sessions: BTreeMap<SessionKey, Vec<OrderedDish>>,
    pub created_at: DateTime<Utc>,
    /// Identity of the operator session that produced the order
    pub actor_id: String,
}

impl OrderArchive {
    /// Snapshot the current book state
    pub fn from_book(book: &OrderBook, actor_id: impl Into<String>) -> Self {
        Self {
            customer: book.customer().clone(),
            sessions: book.sessions().clone(),
            created_at: Utc::now(),
            actor_id: actor_id.into(),
        }
    }

    /// Stable file stem for sink implementations that write one file per
    /// archive, e.g. `order-20260807T120000Z-5fe1`
    pub fn file_stem(&self) -> String {
        let short_actor: String = self.actor_id.chars().take(4).collect();
        format!(
            "order-{}-{}",
            self.created_at.format("%Y%m%dT%H%M%SZ"),
            short_actor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_catalog;
    use crate::order::MealSlot;

    #[test]
    fn test_snapshot_captures_book_state() {
        let mut book = OrderBook::new();
        book.set_customer_field("name", serde_json::json!("Zhao"));
        let key = SessionKey::new(1, MealSlot::Dinner).unwrap();
        book.add_dish(key, default_catalog().remove(1));

        let archive = OrderArchive::from_book(&book, "actor-1");
        assert_eq!(archive.customer.name(), "Zhao");
        assert_eq!(archive.sessions.len(), 1);
        assert_eq!(archive.actor_id, "actor-1");

        // Later mutation does not leak into the snapshot
        book.remove_dish(key, "2");
        assert_eq!(archive.sessions[&key].len(), 1);
    }

    #[test]
    fn test_file_stem_shape() {
        let book = OrderBook::new();
        let archive = OrderArchive::from_book(&book, "5fe1c0ffee");
        let stem = archive.file_stem();
        assert!(stem.starts_with("order-"));
        assert!(stem.ends_with("-5fe1"));
    }
}
