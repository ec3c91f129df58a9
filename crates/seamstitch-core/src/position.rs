//! Grid positions and neighbor enumeration
//!
//! A [`Position`] is addressed as `(row, col)`, matching the usual
//! computer graphics layout where row 0 is the top of the image and
//! column 0 is its left edge.

use std::fmt;

/// A cell address in a grid
///
/// Ordering is lexicographic: first by row, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Row index (y), 0 at the top
    pub row: u32,
    /// Column index (x), 0 at the left
    pub col: u32,
}

impl Position {
    /// Create a position from a row and a column
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the 8 cells surrounding `self`
    ///
    /// A position is not adjacent to itself.
    pub fn is_adjacent8(&self, other: &Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }

    /// True if `other` shares an edge with `self`
    pub fn is_adjacent4(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(u32, u32)> for Position {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Neighbor relation used when walking a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// Offsets as (drow, dcol): left, right, up, down, then the diagonals
/// up-left, down-left, up-right, down-right.
const OFFSETS: [(i64, i64); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Enumerate the in-bounds neighbors of `pos` in a `width` x `height` grid
///
/// The order is fixed: the four orthogonal neighbors (left, right, up,
/// down) come first, followed by the diagonals for
/// [`Connectivity::EightWay`]. Search tie-breaking relies on this order
/// being stable.
pub fn neighbors(
    pos: Position,
    width: u32,
    height: u32,
    connectivity: Connectivity,
) -> impl Iterator<Item = Position> {
    let count = match connectivity {
        Connectivity::FourWay => 4,
        Connectivity::EightWay => 8,
    };
    OFFSETS[..count].iter().filter_map(move |&(dr, dc)| {
        let row = pos.row as i64 + dr;
        let col = pos.col as i64 + dc;
        if row < 0 || col < 0 || row >= height as i64 || col >= width as i64 {
            None
        } else {
            Some(Position::new(row as u32, col as u32))
        }
    })
}
