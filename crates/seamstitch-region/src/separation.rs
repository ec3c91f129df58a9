//! Region separation checks
//!
//! After labeling, regions A and B must only meet across seam cells. These
//! helpers report any place where they touch directly.

use seamstitch_core::{Label, Mask, Position};

/// 4-adjacent pairs of cells labeled region A and region B
///
/// Each pair is returned as `(region_a_cell, region_b_cell)`. An empty
/// result means the seam separates the regions.
pub fn find_region_contacts(mask: &Mask) -> Vec<(Position, Position)> {
    let (width, height) = mask.dimensions();
    let mut contacts = Vec::new();

    for (p, &label) in mask.iter() {
        let right = (p.col + 1 < width).then(|| Position::new(p.row, p.col + 1));
        let down = (p.row + 1 < height).then(|| Position::new(p.row + 1, p.col));
        for n in [right, down].into_iter().flatten() {
            match (label, mask.get_unchecked(n)) {
                (Label::RegionA, Label::RegionB) => contacts.push((p, n)),
                (Label::RegionB, Label::RegionA) => contacts.push((n, p)),
                _ => {}
            }
        }
    }
    contacts
}

/// True if every cell is labeled and the regions never touch directly
pub fn is_cleanly_separated(mask: &Mask) -> bool {
    mask.count(Label::Empty) == 0 && find_region_contacts(mask).is_empty()
}
