//! Stitch mask labels
//!
//! A [`Mask`] records, for every cell, which source image contributes to
//! the composite or that the cell lies on the seam.

use crate::error::Result;
use crate::grid::Grid;
use crate::position::Position;

/// Per-cell label of a stitch mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Not yet labeled; must not survive region labeling
    #[default]
    Empty,
    /// Cell lies on the seam
    Seam,
    /// Cell takes its pixel from the first image (bottom-left side)
    RegionA,
    /// Cell takes its pixel from the second image (top-right side)
    RegionB,
}

impl Label {
    /// Single-character rendering used by [`render_mask`]
    pub fn as_char(self) -> char {
        match self {
            Label::Empty => '.',
            Label::Seam => '#',
            Label::RegionA => 'A',
            Label::RegionB => 'B',
        }
    }
}

/// Stitch mask: one [`Label`] per cell
pub type Mask = Grid<Label>;

impl Grid<Label> {
    /// Create a mask with every cell [`Label::Empty`]
    pub fn empty_mask(width: u32, height: u32) -> Result<Self> {
        Grid::new(width, height, Label::Empty)
    }

    /// Number of cells carrying `label`
    pub fn count(&self, label: Label) -> usize {
        self.data().iter().filter(|&&l| l == label).count()
    }

    /// Positions carrying `label`, in row-major order
    pub fn positions_of(&self, label: Label) -> Vec<Position> {
        self.iter()
            .filter(|&(_, &l)| l == label)
            .map(|(p, _)| p)
            .collect()
    }
}

/// Render a mask as text, one line per row
///
/// `.` = empty, `#` = seam, `A` / `B` = regions.
pub fn render_mask(mask: &Mask) -> String {
    let mut out = String::with_capacity(mask.len() + mask.height() as usize);
    for row in mask.rows() {
        out.extend(row.iter().map(|l| l.as_char()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask() {
        let mask = Mask::empty_mask(3, 2).unwrap();
        assert_eq!(mask.count(Label::Empty), 6);
        assert_eq!(mask.count(Label::Seam), 0);
    }

    #[test]
    fn test_positions_of_and_render() {
        let mut mask = Mask::empty_mask(2, 2).unwrap();
        mask.set(Position::new(0, 0), Label::Seam).unwrap();
        mask.set(Position::new(1, 1), Label::Seam).unwrap();
        mask.set(Position::new(1, 0), Label::RegionA).unwrap();
        mask.set(Position::new(0, 1), Label::RegionB).unwrap();

        assert_eq!(
            mask.positions_of(Label::Seam),
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
        assert_eq!(render_mask(&mask), "#B\nA#\n");
    }
}
