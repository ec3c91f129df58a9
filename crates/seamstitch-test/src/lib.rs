//! seamstitch-test - Regression test support for seamstitch
//!
//! Provides the pieces shared by the integration tests of every crate:
//!
//! - [`RegParams`] - Numbered checks with a summary at the end
//! - [`SimpleRng`] - Reproducible random grids
//! - [`exhaustive_min_cost`] - Brute-force reference seam cost
//! - [`parse_grid`] - Small grids written as text
//!
//! # Usage
//!
//! ```ignore
//! use seamstitch_test::RegParams;
//!
//! let mut rp = RegParams::new("seam");
//! rp.compare_values(0.0, seam_cost, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod oracle;
mod params;
mod rng;

pub use error::{TestError, TestResult};
pub use oracle::exhaustive_min_cost;
pub use params::RegParams;
pub use rng::SimpleRng;

use seamstitch_core::Grid;

/// Parse a whitespace-separated grid of integers, one row per line
///
/// Blank lines are skipped.
///
/// # Examples
///
/// ```
/// let grid = seamstitch_test::parse_grid("0 1\n2 0").unwrap();
/// assert_eq!(grid.dimensions(), (2, 2));
/// ```
pub fn parse_grid(text: &str) -> TestResult<Grid<i32>> {
    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|e| TestError::Parse {
                    line: i + 1,
                    message: format!("'{}': {}", tok, e),
                })
            })
            .collect::<TestResult<Vec<i32>>>()?;
        rows.push(row);
    }
    Ok(Grid::from_rows(rows)?)
}
