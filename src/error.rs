//! Error types for the vsgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for vsgen operations.
///
/// Each variant maps to a specific exit code. The profile document is the
/// only fatal input: everything else (missing fields, missing build
/// description, unmatched detection patterns) falls back to documented
/// defaults and never produces an error.
#[derive(Error, Debug)]
pub enum VsgenError {
    /// The platform profile document is missing, unreadable, or malformed.
    #[error("{0}")]
    ConfigError(String),

    /// Strict mode found a template placeholder with no resolved value.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A filesystem operation failed during reset or write.
    #[error("{0}")]
    IoError(String),
}

impl VsgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            VsgenError::ConfigError(_) => exit_codes::USER_ERROR,
            VsgenError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            VsgenError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for vsgen operations.
pub type Result<T> = std::result::Result<T, VsgenError>;
