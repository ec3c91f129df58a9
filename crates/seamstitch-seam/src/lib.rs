//! seamstitch-seam - Minimum-cost seam search
//!
//! Computes the cheapest 8-connected path ("seam") from the top-left to
//! the bottom-right corner of a grid whose cells carry non-negative
//! costs. The search is Dijkstra's algorithm on a vertex-weighted grid
//! graph with lazy invalidation of superseded frontier entries.
//!
//! # Examples
//!
//! ```
//! use seamstitch_core::{Grid, PixelCost, Position};
//! use seamstitch_seam::{SeamOptions, find_seam};
//!
//! let image1 = Grid::from_rows(vec![vec![0i32, 0], vec![0, 0]]).unwrap();
//! let image2 = Grid::from_rows(vec![vec![0i32, 1], vec![2, 0]]).unwrap();
//! let cost = PixelCost::new(&image1, &image2).unwrap();
//!
//! let seam = find_seam(2, 2, &cost, &SeamOptions::default()).unwrap();
//! assert_eq!(seam.positions(), &[Position::new(0, 0), Position::new(1, 1)]);
//! ```

pub mod error;
pub mod frontier;
pub mod seam;
pub mod search;

// Re-export core types
pub use seamstitch_core;

pub use error::{SeamError, SeamResult};
pub use frontier::{Frontier, TieBreak};
pub use seam::Seam;
pub use search::{SearchStats, SeamOptions, ShortestPathTree, find_seam, search};
