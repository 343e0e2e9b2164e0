//! Error codes for the Crabbie backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Crabbie backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,

    // Business Logic Conflicts
    /// No free join code could be allocated
    JoinCodeConflict,

    // System Errors
    /// Response body could not be produced
    SerializationFailed,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Every code, for uniqueness checks.
    pub const ALL: [ErrorCode; 5] = [
        Self::ValidationError,
        Self::GameNotFound,
        Self::JoinCodeConflict,
        Self::SerializationFailed,
        Self::ConfigError,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",

            Self::SerializationFailed => "SERIALIZATION_FAILED",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
