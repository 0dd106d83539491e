//! HTTP API
//!
//! Thin JSON handlers over [`AppState`]; every response uses the
//! [`ApiResponse`](shared::response::ApiResponse) envelope.

pub mod catalog;
pub mod customer;
pub mod orders;
pub mod report;
pub mod wizard;

use crate::core::AppState;
use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/catalog", get(catalog::list).put(catalog::replace))
        .route("/api/customer", get(customer::get).patch(customer::update))
        .route("/api/sessions/{key}", get(orders::session))
        .route("/api/sessions/{key}/dishes", post(orders::add_dish))
        .route(
            "/api/sessions/{key}/dishes/{selector}",
            delete(orders::remove_dish),
        )
        .route("/api/summary", get(report::summary))
        .route("/api/report", get(report::report))
        .route("/api/wizard", get(wizard::current))
        .route("/api/wizard/next", post(wizard::next))
        .route("/api/wizard/back", post(wizard::back))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Parse a session key path segment into a typed key
pub(crate) fn parse_session_key(raw: &str) -> crate::utils::AppResult<shared::order::SessionKey> {
    raw.parse()
        .map_err(|e: shared::order::SessionKeyError| shared::AppError::invalid_format(e.to_string()))
}
