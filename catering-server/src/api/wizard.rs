//! Wizard API Handlers

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::core::AppState;
use crate::orders::WizardStage;
use crate::utils::AppResult;
use shared::response::ApiResponse;

/// Wizard stage response
#[derive(Debug, Serialize)]
pub struct StageResponse {
    pub stage: WizardStage,
}

/// Current wizard stage
pub async fn current(State(state): State<AppState>) -> Json<ApiResponse<StageResponse>> {
    let stage = *state.wizard.read();
    Json(ApiResponse::ok(StageResponse { stage }))
}

/// Advance to the next stage
///
/// Entering the report stage enqueues the archive snapshot; persistence
/// is fire-and-forget and never blocks the transition.
pub async fn next(State(state): State<AppState>) -> AppResult<Json<ApiResponse<StageResponse>>> {
    let next = {
        let mut wizard = state.wizard.write();
        let current = *wizard;
        let next = current.advance(state.book.read().customer())?;
        *wizard = next;
        if current != WizardStage::Report && next == WizardStage::Report {
            state.enqueue_archive();
        }
        next
    };
    tracing::info!(stage = next.as_str(), "wizard advanced");
    Ok(Json(ApiResponse::ok(StageResponse { stage: next })))
}

/// Step back one stage
pub async fn back(State(state): State<AppState>) -> Json<ApiResponse<StageResponse>> {
    let stage = {
        let mut wizard = state.wizard.write();
        *wizard = wizard.back();
        *wizard
    };
    Json(ApiResponse::ok(StageResponse { stage }))
}
