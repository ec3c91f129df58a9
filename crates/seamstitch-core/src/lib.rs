//! Seamstitch Core - Basic data structures for seam stitching
//!
//! This crate provides the data structures shared by the seam search and
//! the region labeler:
//!
//! - [`Position`] / [`Connectivity`] - Cell addresses and neighbor relations
//! - [`Grid`] - Row-major rectangular container
//! - [`Label`] / [`Mask`] - Per-cell stitch labels
//! - [`CostModel`] / [`PixelCost`] - Per-cell vertex weights

pub mod cost;
pub mod error;
pub mod grid;
pub mod mask;
pub mod position;

pub use cost::{CostModel, PixelCost, PixelDistance, Rgb, evaluate_costs};
pub use error::{Error, Result};
pub use grid::Grid;
pub use mask::{Label, Mask, render_mask};
pub use position::{Connectivity, Position, neighbors};
