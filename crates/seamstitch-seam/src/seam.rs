//! The seam: an ordered, 8-connected path of positions

use seamstitch_core::{CostModel, Position};
use std::collections::HashSet;
use std::ops::Deref;

/// Ordered sequence of positions from the source corner to the target
/// corner, consecutive positions 8-adjacent
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Seam {
    positions: Vec<Position>,
}

impl Seam {
    /// Wrap a sequence of positions in source-to-target order
    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Positions in source-to-target order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Unwrap into the position vector
    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    /// True if every consecutive pair is 8-adjacent
    pub fn is_connected8(&self) -> bool {
        self.positions.windows(2).all(|w| w[0].is_adjacent8(&w[1]))
    }

    /// Sum of cell costs along the seam, excluding the first cell
    pub fn cost<M: CostModel + ?Sized>(&self, model: &M) -> f64 {
        self.positions.iter().skip(1).map(|&p| model.cost(p)).sum()
    }

    /// Diagonal steps whose corner cells are both off the seam
    ///
    /// For a step from `a` to `b` where both coordinates change, the corner
    /// cells are `(a.row, b.col)` and `(b.row, a.col)`. When neither is on
    /// the seam they touch only diagonally: an 8-connected flood fill
    /// crosses the seam there, a 4-connected one does not.
    pub fn diagonal_gaps(&self) -> Vec<(Position, Position)> {
        let on_seam: HashSet<Position> = self.positions.iter().copied().collect();
        self.positions
            .windows(2)
            .map(|w| (w[0], w[1]))
            .filter(|(a, b)| a.row != b.row && a.col != b.col)
            .filter(|(a, b)| {
                !on_seam.contains(&Position::new(a.row, b.col))
                    && !on_seam.contains(&Position::new(b.row, a.col))
            })
            .collect()
    }
}

impl Deref for Seam {
    type Target = [Position];

    fn deref(&self) -> &[Position] {
        &self.positions
    }
}

impl From<Seam> for Vec<Position> {
    fn from(seam: Seam) -> Self {
        seam.positions
    }
}

impl<'a> IntoIterator for &'a Seam {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
