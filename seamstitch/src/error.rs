//! Error types for the stitching facade

use seamstitch_region::RegionError;
use seamstitch_seam::SeamError;
use thiserror::Error;

/// Errors that can occur while stitching two images
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StitchError {
    /// Invalid input grids
    #[error("core error: {0}")]
    Core(#[from] seamstitch_core::Error),

    /// Seam search failed
    #[error("seam error: {0}")]
    Seam(#[from] SeamError),

    /// Region labeling failed
    #[error("region error: {0}")]
    Region(#[from] RegionError),
}

/// Result type for stitching operations
pub type StitchResult<T> = Result<T, StitchError>;
