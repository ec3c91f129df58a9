//! Cells sealed off by the seam
//!
//! A minimal seam can double back on itself and wall in cells that
//! neither seed fill reaches. Such a cell still lies on one definite side
//! of the seam. Closing the seam around the top-right corner outside the
//! grid turns it into a closed curve with region B inside; a cell is in
//! region B exactly when a ray from it to the left edge crosses the seam
//! an odd number of times.

use crate::error::RegionResult;
use crate::floodfill::floodfill;
use seamstitch_core::{Connectivity, Label, Mask, Position};

/// Cells labeled by [`resolve_pockets`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PocketStats {
    /// Total cells labeled
    pub cells: usize,
    /// Cells assigned to region A
    pub region_a: usize,
    /// Cells assigned to region B
    pub region_b: usize,
}

/// Region on whose side of `seam` the off-seam cell `p` lies
///
/// Counts seam steps between row `p.row` and row `p.row + 1` whose
/// endpoint on row `p.row` is left of `p`. Odd means region B.
pub fn side_of_seam(seam: &[Position], p: Position) -> Label {
    let crossings = seam
        .windows(2)
        .filter(|w| {
            let (upper, lower) = if w[0].row <= w[1].row {
                (w[0], w[1])
            } else {
                (w[1], w[0])
            };
            upper.row == p.row && lower.row == p.row + 1 && upper.col < p.col
        })
        .count();

    if crossings % 2 == 1 {
        Label::RegionB
    } else {
        Label::RegionA
    }
}

/// Label every empty cell by the side of the seam it lies on
///
/// Each empty 4-connected component is classified once, from its first
/// cell in row-major order, and filled as a whole.
pub fn resolve_pockets(mask: &mut Mask, seam: &[Position]) -> RegionResult<PocketStats> {
    let mut stats = PocketStats::default();
    for p in mask.positions_of(Label::Empty) {
        if mask.get_unchecked(p) != Label::Empty {
            continue;
        }
        let label = side_of_seam(seam, p);
        let filled = floodfill(mask, p, label, Connectivity::FourWay)?;
        stats.cells += filled;
        match label {
            Label::RegionA => stats.region_a += filled,
            _ => stats.region_b += filled,
        }
    }
    Ok(stats)
}
