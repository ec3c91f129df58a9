//! Seamstitch - Minimum-cost seam masks for image compositing
//!
//! Given two equal-sized images, finds the cheapest 8-connected seam from
//! the top-left to the bottom-right corner and splits the grid along it
//! into two labeled regions. The resulting mask tells a compositor which
//! image each pixel comes from.
//!
//! # Example
//!
//! ```
//! use seamstitch::{Grid, Label, Position, Stitcher};
//!
//! let image1 = Grid::from_rows(vec![vec![0i32, 0], vec![0, 0]]).unwrap();
//! let image2 = Grid::from_rows(vec![vec![0i32, 1], vec![2, 0]]).unwrap();
//!
//! let mask = Stitcher::new().stitch(&image1, &image2).unwrap();
//! assert_eq!(mask.get(Position::new(1, 0)).unwrap(), Label::RegionA);
//! assert_eq!(mask.get(Position::new(0, 1)).unwrap(), Label::RegionB);
//! ```

pub mod error;
pub mod stitcher;

// Re-export core types (primary data structures used everywhere)
pub use seamstitch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use seamstitch_region as region;
pub use seamstitch_seam as seam;

pub use error::{StitchError, StitchResult};
pub use seamstitch_seam::{Seam, SeamOptions, TieBreak};
pub use stitcher::{StitchOptions, Stitcher, Stitching};
