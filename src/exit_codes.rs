//! Exit code constants for the vsgen CLI.
//!
//! - 0: Success (including runs where auto-detection fell back to defaults)
//! - 1: User error (profile document missing or malformed, bad arguments)
//! - 2: Validation failure (strict placeholder-coverage check)
//! - 3: Filesystem failure (reset or write aborted mid-run)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing or malformed platform profile document, bad arguments.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a template references a placeholder with no resolved value.
pub const VALIDATION_FAILURE: i32 = 2;

/// Filesystem failure: directory reset or file write failed.
pub const IO_FAILURE: i32 = 3;
