//! HTTP status code and response mapping for error codes

use super::codes::ErrorCode;
use super::types::AppError;
use crate::response::ApiResponse;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::DishNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::DishAlreadySelected => StatusCode::CONFLICT,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError | Self::ArchiveFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body: ApiResponse<()> = ApiResponse::error(self.code.as_wire_code(), self.message);
        (status, Json(body)).into_response()
    }
}
