//! Error types and exit codes for ux4ai
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration)
//! - 3: Data error (unknown product or student)
//!
//! Data-quality problems inside the submission tree never surface here; they
//! become [`crate::diagnostics::Diagnostic`]s instead.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the ux4ai binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown product/student (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ux4ai operations
#[derive(Error, Debug)]
pub enum Ux4aiError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("failed to read config {path:?}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    #[error("{0}")]
    Other(String),
}

impl Ux4aiError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        Ux4aiError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        Ux4aiError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        Ux4aiError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a configuration fault
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Ux4aiError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Ux4aiError::UnknownFormat(_)
            | Ux4aiError::UsageError(_)
            | Ux4aiError::InvalidConfig { .. }
            | Ux4aiError::InvalidValue { .. } => ExitCode::Usage,

            Ux4aiError::NotFound { .. } => ExitCode::Data,

            Ux4aiError::Json(_)
            | Ux4aiError::Toml(_)
            | Ux4aiError::FailedOperationWithTarget { .. }
            | Ux4aiError::ConfigRead { .. }
            | Ux4aiError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            Ux4aiError::UnknownFormat(_) => "unknown_format",
            Ux4aiError::UsageError(_) => "usage_error",
            Ux4aiError::InvalidConfig { .. } => "invalid_config",
            Ux4aiError::InvalidValue { .. } => "invalid_value",
            Ux4aiError::NotFound { .. } => "not_found",
            Ux4aiError::Json(_) => "json_error",
            Ux4aiError::Toml(_) => "toml_error",
            Ux4aiError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            Ux4aiError::ConfigRead { .. } => "config_read",
            Ux4aiError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for ux4ai operations
pub type Result<T> = std::result::Result<T, Ux4aiError>;
