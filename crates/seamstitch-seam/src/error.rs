//! Error types for seamstitch-seam

use thiserror::Error;

/// Errors that can occur during seam search
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeamError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] seamstitch_core::Error),

    /// The target corner cannot be reached from the source corner
    #[error("no seam from (0, 0) to the far corner of a {width}x{height} grid")]
    NoPath { width: u32, height: u32 },
}

/// Result type for seam operations
pub type SeamResult<T> = Result<T, SeamError>;
