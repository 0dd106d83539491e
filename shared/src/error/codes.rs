//! Unified error codes for the catering order system
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order ====================
    /// Session key is not valid for the current day count
    SessionInvalid = 4001,
    /// Dish not found in the working catalog
    DishNotFound = 4002,
    /// Dish already selected for this session (single-instance policy)
    DishAlreadySelected = 4003,
    /// Wizard stage transition blocked by validation
    StageBlocked = 4004,

    // ==================== 6xxx: Catalog ====================
    /// Catalog replacement rejected because the update was empty
    CatalogEmpty = 6001,
    /// Catalog source unreachable
    CatalogUnavailable = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
    /// Archive persistence failed
    ArchiveFailed = 9003,
}

impl ErrorCode {
    /// Default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::SessionInvalid => "Invalid session key",
            Self::DishNotFound => "Dish not found",
            Self::DishAlreadySelected => "Dish already selected for this session",
            Self::StageBlocked => "Stage transition blocked",
            Self::CatalogEmpty => "Catalog update is empty",
            Self::CatalogUnavailable => "Catalog source unavailable",
            Self::InternalError => "Internal server error",
            Self::ConfigError => "Configuration error",
            Self::ArchiveFailed => "Archive persistence failed",
        }
    }

    /// Wire representation used in the API envelope, e.g. "E4002"
    pub fn as_wire_code(&self) -> String {
        format!("E{:04}", *self as u16)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::InvalidFormat),
            7 => Ok(Self::RequiredField),
            4001 => Ok(Self::SessionInvalid),
            4002 => Ok(Self::DishNotFound),
            4003 => Ok(Self::DishAlreadySelected),
            4004 => Ok(Self::StageBlocked),
            6001 => Ok(Self::CatalogEmpty),
            6002 => Ok(Self::CatalogUnavailable),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::ConfigError),
            9003 => Ok(Self::ArchiveFailed),
            other => Err(format!("unknown error code: {}", other)),
        }
    }
}
