//! Aggregation engine
//!
//! Rolls a full [`OrderBook`] up into the consolidated [`Summary`]:
//! per-(ingredient, vendor) procurement totals and the overall cost,
//! everything scaled by the table count.
//!
//! Quantities accumulate through `Decimal` so repeated fractional amounts
//! (0.1 kg per table, 30 tables, 4 sessions) sum exactly. Results are
//! stored as unrounded `f64`; display rounding happens at report
//! rendering, never here.

use rust_decimal::prelude::*;
use shared::order::{IngredientTotal, OrderBook, Summary, VendorGroup};
use std::collections::HashMap;

/// Convert f64 to Decimal for accumulation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, without rounding
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Compute the procurement and cost summary for an order book
///
/// Pure function of the book state: no clock, no randomness, no caching.
/// Sessions beyond the current day count are excluded from the
/// computation but their data is retained in the book, so raising the day
/// count back restores them.
///
/// Per-(item, vendor) totals appear in first-seen order; the unit is
/// recorded from the first occurrence of the pair. A later occurrence
/// with a different unit keeps the first-seen unit and logs a warning;
/// there is no unit conversion.
pub fn compute_summary(book: &OrderBook) -> Summary {
    let table_count = Decimal::from(book.customer().table_count());
    let day_count = book.customer().day_count();

    let mut total_cost = Decimal::ZERO;
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut ingredients: Vec<IngredientTotal> = Vec::new();
    let mut totals: Vec<Decimal> = Vec::new();

    for (key, selections) in book.sessions() {
        if key.day() > day_count {
            continue;
        }
        for selection in selections {
            let dish = &selection.dish;
            total_cost += to_decimal(dish.cost) * table_count;

            for req in &dish.ingredients {
                let pair = (req.item.clone(), req.vendor.clone());
                let idx = match index.get(&pair) {
                    Some(&idx) => {
                        if ingredients[idx].unit != req.unit {
                            tracing::warn!(
                                item = %req.item,
                                vendor = %req.vendor,
                                kept_unit = %ingredients[idx].unit,
                                ignored_unit = %req.unit,
                                "ingredient unit mismatch, keeping first-seen unit"
                            );
                        }
                        idx
                    }
                    None => {
                        let idx = ingredients.len();
                        index.insert(pair, idx);
                        ingredients.push(IngredientTotal {
                            item: req.item.clone(),
                            vendor: req.vendor.clone(),
                            unit: req.unit.clone(),
                            total: 0.0,
                        });
                        totals.push(Decimal::ZERO);
                        idx
                    }
                };
                totals[idx] += to_decimal(req.amount) * table_count;
            }
        }
    }

    for (entry, total) in ingredients.iter_mut().zip(&totals) {
        entry.total = to_f64(*total);
    }

    // Vendor groups in first-seen vendor order, per-vendor order preserved
    let mut vendor_index: HashMap<String, usize> = HashMap::new();
    let mut vendors: Vec<VendorGroup> = Vec::new();
    for entry in &ingredients {
        let idx = *vendor_index.entry(entry.vendor.clone()).or_insert_with(|| {
            vendors.push(VendorGroup {
                vendor: entry.vendor.clone(),
                ingredients: Vec::new(),
            });
            vendors.len() - 1
        });
        vendors[idx].ingredients.push(entry.clone());
    }

    Summary {
        ingredients,
        vendors,
        total_cost: to_f64(total_cost),
    }
}
