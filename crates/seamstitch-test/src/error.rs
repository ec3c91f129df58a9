//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test data
#[derive(Debug, Error)]
pub enum TestError {
    /// A text grid could not be parsed
    #[error("failed to parse grid at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Grid construction failed
    #[error("grid error: {0}")]
    Grid(#[from] seamstitch_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
