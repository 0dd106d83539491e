//! Utilities: logging setup and error re-exports

pub mod logger;

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCode};
pub use shared::response::ApiResponse;
