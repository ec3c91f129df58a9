//! Seam marking and flood fill
//!
//! Turns a seam into a two-region mask. Seam cells are marked first; then
//! region A grows from the bottom-left corner and region B from the
//! top-right corner. Fills only ever claim [`Label::Empty`] cells, so they
//! stop at the seam and at each other.
//!
//! The seam is 8-connected while the fills default to 4-connected. The two
//! off-seam cells beside a diagonal seam step touch only at a corner, so a
//! 4-connected fill cannot cross there but an 8-connected one can.
//! [`RegionStats::leaked`] reports when region A reached region B's seed.

use crate::error::{RegionError, RegionResult};
use crate::pockets::resolve_pockets;
use log::{debug, warn};
use seamstitch_core::{Connectivity, Label, Mask, Position, neighbors};

/// Options for region labeling
#[derive(Debug, Clone, Default)]
pub struct FillOptions {
    /// Connectivity used when growing regions; `EightWay` leaks through
    /// diagonal seam steps
    pub connectivity: Connectivity,
    /// Seed for region A; bottom-left corner when unset
    pub seed_a: Option<Position>,
    /// Seed for region B; top-right corner when unset
    pub seed_b: Option<Position>,
}

impl FillOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            ..Default::default()
        }
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Override the region A seed
    pub fn with_seed_a(mut self, seed: Position) -> Self {
        self.seed_a = Some(seed);
        self
    }

    /// Override the region B seed
    pub fn with_seed_b(mut self, seed: Position) -> Self {
        self.seed_b = Some(seed);
        self
    }

    /// Seeds resolved against a `width` x `height` mask, as (a, b)
    pub fn seeds(&self, width: u32, height: u32) -> (Position, Position) {
        (
            self.seed_a
                .unwrap_or(Position::new(height.saturating_sub(1), 0)),
            self.seed_b.unwrap_or(Position::new(0, width.saturating_sub(1))),
        )
    }
}

/// Cell counts produced by [`label_regions`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionStats {
    /// Cells on the seam
    pub seam: usize,
    /// Cells labeled region A
    pub region_a: usize,
    /// Cells labeled region B
    pub region_b: usize,
    /// Region A's fill reached region B's seed
    pub leaked: bool,
    /// Enclosed cells labeled by side-of-seam parity
    pub pockets: usize,
}

/// Mark every seam position as [`Label::Seam`]
///
/// Returns the number of distinct seam cells.
///
/// # Errors
///
/// Returns `RegionError::InvalidSeam` if the seam is empty, does not run
/// from `(0, 0)` to `(height - 1, width - 1)`, has a step that is not
/// 8-adjacent, or leaves the mask.
pub fn mark_seam(mask: &mut Mask, seam: &[Position]) -> RegionResult<usize> {
    let (width, height) = mask.dimensions();
    let source = Position::new(0, 0);
    let target = Position::new(height - 1, width - 1);

    match (seam.first(), seam.last()) {
        (Some(&first), Some(&last)) if first == source && last == target => {}
        (Some(first), Some(last)) => {
            return Err(RegionError::InvalidSeam(format!(
                "seam runs from {} to {}, expected {} to {}",
                first, last, source, target
            )));
        }
        _ => return Err(RegionError::InvalidSeam("seam is empty".to_string())),
    }

    if let Some(w) = seam.windows(2).find(|w| !w[0].is_adjacent8(&w[1])) {
        return Err(RegionError::InvalidSeam(format!(
            "{} and {} are not adjacent",
            w[0], w[1]
        )));
    }
    if let Some(p) = seam.iter().find(|&&p| !mask.contains(p)) {
        return Err(RegionError::InvalidSeam(format!(
            "{} is outside the {}x{} mask",
            p, width, height
        )));
    }

    for &p in seam {
        mask.set_unchecked(p, Label::Seam);
    }
    Ok(mask.count(Label::Seam))
}

/// Flood fill empty cells of a mask starting from a seed
///
/// Claims every [`Label::Empty`] cell connected to `seed` and returns the
/// number of cells filled. A seed that is not empty fills nothing. The
/// fill uses an explicit work stack, so grid size is not limited by
/// recursion depth.
///
/// # Errors
///
/// Returns `RegionError::InvalidSeed` if the seed is outside the mask and
/// `RegionError::InvalidLabel` unless `label` is a region label.
pub fn floodfill(
    mask: &mut Mask,
    seed: Position,
    label: Label,
    connectivity: Connectivity,
) -> RegionResult<usize> {
    if !matches!(label, Label::RegionA | Label::RegionB) {
        return Err(RegionError::InvalidLabel(label));
    }
    if !mask.contains(seed) {
        return Err(RegionError::InvalidSeed {
            row: seed.row,
            col: seed.col,
        });
    }

    let (width, height) = mask.dimensions();
    let mut filled_count = 0usize;
    let mut stack = vec![seed];

    while let Some(p) = stack.pop() {
        if mask.get_unchecked(p) != Label::Empty {
            continue;
        }
        mask.set_unchecked(p, label);
        filled_count += 1;

        stack.extend(
            neighbors(p, width, height, connectivity).filter(|&n| mask.get_unchecked(n) == Label::Empty),
        );
    }

    debug!("flood fill {:?} from {}: {} cells", label, seed, filled_count);
    Ok(filled_count)
}

/// Label both regions of a mask whose seam is already marked
///
/// # Errors
///
/// Returns `RegionError::InvalidSeed` for a seed outside the mask and
/// `RegionError::UnlabeledCells` if empty cells remain, which happens
/// only when the seam encloses cells unreachable from either seed. Use
/// [`label_mask`] to resolve such cells from the seam itself.
///
/// On `UnlabeledCells` both fills have already run, so the mask is left
/// partially labeled with the enclosed cells still empty. Start from a
/// fresh mask rather than reusing it.
pub fn label_regions(mask: &mut Mask, options: &FillOptions) -> RegionResult<RegionStats> {
    let stats = fill_from_seeds(mask, options)?;
    let unlabeled = mask.count(Label::Empty);
    if unlabeled > 0 {
        warn!("{} cells enclosed by the seam remain unlabeled", unlabeled);
        return Err(RegionError::UnlabeledCells { count: unlabeled });
    }
    Ok(stats)
}

/// Mark `seam` on an empty mask and label every remaining cell
///
/// Runs both seed fills, then assigns any cells the seam sealed off from
/// both seeds to the side of the seam they lie on.
///
/// # Errors
///
/// Returns the errors of [`mark_seam`] and `RegionError::InvalidSeed`.
pub fn label_mask(mask: &mut Mask, seam: &[Position], options: &FillOptions) -> RegionResult<RegionStats> {
    mark_seam(mask, seam)?;
    let mut stats = fill_from_seeds(mask, options)?;
    let pockets = resolve_pockets(mask, seam)?;
    if pockets.cells > 0 {
        debug!(
            "resolved {} enclosed cells ({} to region A, {} to region B)",
            pockets.cells, pockets.region_a, pockets.region_b
        );
    }
    stats.region_a += pockets.region_a;
    stats.region_b += pockets.region_b;
    stats.pockets = pockets.cells;
    Ok(stats)
}

fn fill_from_seeds(mask: &mut Mask, options: &FillOptions) -> RegionResult<RegionStats> {
    let (width, height) = mask.dimensions();
    let (seed_a, seed_b) = options.seeds(width, height);
    for seed in [seed_a, seed_b] {
        if !mask.contains(seed) {
            return Err(RegionError::InvalidSeed {
                row: seed.row,
                col: seed.col,
            });
        }
    }

    let region_a = floodfill(mask, seed_a, Label::RegionA, options.connectivity)?;
    let leaked = seed_a != seed_b && mask.get_unchecked(seed_b) == Label::RegionA;
    if leaked {
        warn!(
            "region A reached region B seed {}; seam has a diagonal gap",
            seed_b
        );
    }
    let region_b = floodfill(mask, seed_b, Label::RegionB, options.connectivity)?;

    Ok(RegionStats {
        seam: mask.count(Label::Seam),
        region_a,
        region_b,
        leaked,
        pockets: 0,
    })
}
