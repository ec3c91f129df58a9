//! Error types for seamstitch-region

use seamstitch_core::Label;
use thiserror::Error;

/// Errors that can occur during region labeling
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] seamstitch_core::Error),

    /// Seed position outside the mask
    #[error("invalid seed position: ({row}, {col})")]
    InvalidSeed { row: u32, col: u32 },

    /// Seam does not fit the mask
    #[error("invalid seam: {0}")]
    InvalidSeam(String),

    /// Flood fill asked to paint a label other than a region
    #[error("cannot flood fill with label {0:?}")]
    InvalidLabel(Label),

    /// Cells left unlabeled after both fills
    #[error("{count} cells remain unlabeled after flood fill")]
    UnlabeledCells { count: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
