//! Summary and report API Handlers
//!
//! `/api/summary` returns raw, unrounded totals for programmatic use;
//! `/api/report` is the rendered procurement report, where quantities are
//! rounded to one decimal place. Rounding lives here and nowhere else.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::core::AppState;
use shared::models::CustomerParams;
use shared::order::Summary;
use shared::response::ApiResponse;

/// Recomputed summary for the current book state
pub async fn summary(State(state): State<AppState>) -> Json<ApiResponse<Summary>> {
    Json(ApiResponse::ok(state.summary()))
}

/// One rendered procurement line
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportLine {
    pub item: String,
    pub vendor: String,
    /// Quantity rounded to one decimal place, e.g. "20.0"
    pub quantity: String,
    pub unit: String,
}

/// Procurement lines for one vendor
#[derive(Debug, Serialize)]
pub struct ReportVendorGroup {
    pub vendor: String,
    pub lines: Vec<ReportLine>,
}

/// Rendered banquet report
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub customer: CustomerParams,
    pub table_count: u32,
    pub ingredients: Vec<ReportLine>,
    pub vendors: Vec<ReportVendorGroup>,
    pub total_cost: f64,
}

impl ReportView {
    fn render(customer: CustomerParams, summary: Summary) -> Self {
        let table_count = customer.table_count();
        let line = |e: &shared::order::IngredientTotal| ReportLine {
            item: e.item.clone(),
            vendor: e.vendor.clone(),
            quantity: format!("{:.1}", e.total),
            unit: e.unit.clone(),
        };
        Self {
            customer,
            table_count,
            ingredients: summary.ingredients.iter().map(line).collect(),
            vendors: summary
                .vendors
                .iter()
                .map(|g| ReportVendorGroup {
                    vendor: g.vendor.clone(),
                    lines: g.ingredients.iter().map(line).collect(),
                })
                .collect(),
            total_cost: summary.total_cost,
        }
    }
}

/// Rendered report for the current book state
pub async fn report(State(state): State<AppState>) -> Json<ApiResponse<ReportView>> {
    let customer = state.book.read().customer().clone();
    let summary = state.summary();
    Json(ApiResponse::ok(ReportView::render(customer, summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{IngredientTotal, VendorGroup};

    #[test]
    fn test_render_rounds_to_one_decimal() {
        let summary = Summary {
            ingredients: vec![
                IngredientTotal {
                    item: "abalone".to_string(),
                    vendor: "seafood".to_string(),
                    unit: "pc".to_string(),
                    total: 20.0,
                },
                IngredientTotal {
                    item: "sea cucumber".to_string(),
                    vendor: "dried goods".to_string(),
                    unit: "kg".to_string(),
                    total: 2.34,
                },
            ],
            vendors: vec![VendorGroup {
                vendor: "seafood".to_string(),
                ingredients: vec![IngredientTotal {
                    item: "abalone".to_string(),
                    vendor: "seafood".to_string(),
                    unit: "pc".to_string(),
                    total: 20.0,
                }],
            }],
            total_cost: 1200.0,
        };

        let view = ReportView::render(CustomerParams::new(), summary);
        assert_eq!(view.ingredients[0].quantity, "20.0");
        assert_eq!(view.ingredients[1].quantity, "2.3");
        assert_eq!(view.vendors[0].lines[0].quantity, "20.0");
        // Cost is not rounded by the renderer
        assert_eq!(view.total_cost, 1200.0);
    }
}
