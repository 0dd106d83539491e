//! Catalog API Handlers

use axum::Json;
use axum::extract::State;

use crate::core::AppState;
use crate::utils::AppResult;
use shared::models::Dish;
use shared::response::ApiResponse;
use shared::{AppError, ErrorCode};

/// List the working catalog
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<Dish>>> {
    Json(ApiResponse::ok(state.catalog.dishes()))
}

/// Push a full catalog replacement
///
/// Mirrors the remote-store subscription: any non-empty list replaces the
/// working catalog wholesale; an empty list is rejected and the catalog
/// stays untouched.
pub async fn replace(
    State(state): State<AppState>,
    Json(dishes): Json<Vec<Dish>>,
) -> AppResult<Json<ApiResponse<usize>>> {
    if dishes.is_empty() {
        return Err(AppError::new(ErrorCode::CatalogEmpty));
    }
    let count = dishes.len();
    if !state.push_catalog(dishes) {
        return Err(AppError::internal("catalog update could not be queued"));
    }
    Ok(Json(ApiResponse::ok_with_message(
        count,
        "Catalog update queued",
    )))
}
