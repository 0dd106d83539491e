//! Session selection API Handlers

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use super::parse_session_key;
use crate::core::AppState;
use crate::utils::AppResult;
use shared::order::OrderedDish;
use shared::response::ApiResponse;
use shared::{AppError, ErrorCode};

/// Ordered dish list for one session
pub async fn session(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<OrderedDish>>>> {
    let key = parse_session_key(&key)?;
    Ok(Json(ApiResponse::ok(state.book.read().session(key).to_vec())))
}

/// Add dish request
#[derive(Debug, Deserialize)]
pub struct AddDishRequest {
    pub dish_id: String,
}

/// Add dish response
#[derive(Debug, Serialize)]
pub struct AddDishResponse {
    pub instance_id: String,
}

/// Add a catalog dish to a session
pub async fn add_dish(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<AddDishRequest>,
) -> AppResult<Json<ApiResponse<AddDishResponse>>> {
    let key = parse_session_key(&key)?;
    let dish = state
        .catalog
        .find(&payload.dish_id)
        .ok_or_else(|| AppError::dish_not_found(&payload.dish_id))?;

    let mut book = state.book.write();
    match book.add_dish(key, dish) {
        Some(instance_id) => Ok(Json(ApiResponse::ok(AddDishResponse { instance_id }))),
        None => Err(AppError::with_message(
            ErrorCode::DishAlreadySelected,
            format!("dish {} is already selected for {}", payload.dish_id, key),
        )),
    }
}

/// Remove dish response
#[derive(Debug, Serialize)]
pub struct RemoveDishResponse {
    pub removed: bool,
}

/// Remove one dish instance from a session
///
/// The selector may be an instance id or a dish id. Removing a
/// non-existent entry is a no-op, not an error.
pub async fn remove_dish(
    State(state): State<AppState>,
    Path((key, selector)): Path<(String, String)>,
) -> AppResult<Json<ApiResponse<RemoveDishResponse>>> {
    let key = parse_session_key(&key)?;
    let removed = state.book.write().remove_dish(key, &selector);
    Ok(Json(ApiResponse::ok(RemoveDishResponse { removed })))
}
