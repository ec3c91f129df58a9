//! Error types for seamstitch-core
//!
//! Provides a unified error type for grid construction, position access
//! and cost evaluation. Dimension problems are reported before any
//! working storage is allocated.

use thiserror::Error;

/// Seamstitch core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid grid dimensions (zero width or height)
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Two grids that must agree in size do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Position outside the grid
    #[error("position ({row}, {col}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Cost model produced a negative or NaN cost
    #[error("invalid cost {value} at ({row}, {col})")]
    InvalidCost { row: u32, col: u32, value: f64 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for seamstitch core operations
pub type Result<T> = std::result::Result<T, Error>;
