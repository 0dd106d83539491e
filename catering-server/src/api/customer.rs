//! Customer API Handlers

use axum::Json;
use axum::extract::State;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::AppState;
use crate::utils::AppResult;
use shared::AppError;
use shared::models::CustomerParams;
use shared::response::ApiResponse;

/// Current customer parameters
pub async fn get(State(state): State<AppState>) -> Json<ApiResponse<CustomerParams>> {
    Json(ApiResponse::ok(state.book.read().customer().clone()))
}

/// Shallow-merge customer fields
///
/// Each submitted field replaces exactly that field; absent siblings are
/// never touched. Values are stored as sent, coercion happens at read
/// time.
pub async fn update(
    State(state): State<AppState>,
    Json(fields): Json<BTreeMap<String, Value>>,
) -> AppResult<Json<ApiResponse<CustomerParams>>> {
    if fields.is_empty() {
        return Err(AppError::invalid_request("no fields to update"));
    }
    let mut book = state.book.write();
    for (field, value) in fields {
        book.set_customer_field(field, value);
    }
    Ok(Json(ApiResponse::ok(book.customer().clone())))
}
