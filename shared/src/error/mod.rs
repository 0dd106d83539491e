//! Unified error handling
//!
//! # Module structure
//!
//! - [`codes`] - Error code enum shared across server and clients
//! - [`types`] - [`AppError`] and constructors
//! - [`http`] - HTTP status and response mapping

pub mod codes;
pub mod http;
pub mod types;

pub use codes::ErrorCode;
pub use types::AppError;

/// Result alias used throughout the workspace
pub type AppResult<T> = Result<T, AppError>;
