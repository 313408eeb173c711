//! Structured error types for the gradestat crates.

use thiserror::Error;

/// Unified error type for all gradestat operations.
#[derive(Debug, Error)]
pub enum GradestatError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input (non-numeric or non-finite sample values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration (unusable bin boundaries, bad options)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience alias used throughout the gradestat crates.
pub type Result<T> = std::result::Result<T, GradestatError>;
