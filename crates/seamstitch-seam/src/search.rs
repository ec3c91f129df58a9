//! Vertex-weighted shortest path search
//!
//! Finds the minimum-cost seam from the top-left corner to the
//! bottom-right corner of a grid, moving between 8-connected cells. Each
//! step costs the weight of the cell entered; the source cell is free.
//!
//! All working state (distance table, predecessor table, frontier) is
//! created by [`search`] and owned by the returned [`ShortestPathTree`],
//! so concurrent or repeated searches never share mutable state.
//!
//! The search stops as soon as the target is drawn from the frontier.
//! Since every weight is non-negative its distance is final at that
//! point; other cells may still hold tentative distances.

use crate::error::{SeamError, SeamResult};
use crate::frontier::{Frontier, TieBreak};
use crate::seam::Seam;
use log::debug;
use seamstitch_core::{Connectivity, CostModel, Grid, Position, evaluate_costs, neighbors};

/// Options for seam search
#[derive(Debug, Clone, Default)]
pub struct SeamOptions {
    /// Order among frontier entries of equal distance
    pub tie_break: TieBreak,
}

impl SeamOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break policy
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Counters gathered during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions drawn from the frontier and expanded
    pub settled: u32,
    /// Superseded frontier entries discarded on pop
    pub stale: u32,
    /// Frontier insertions
    pub pushed: u64,
}

/// Distance and predecessor tables of a completed search
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    distance: Grid<f64>,
    predecessor: Grid<Option<Position>>,
    source: Position,
    target: Position,
    stats: SearchStats,
}

impl ShortestPathTree {
    /// Source corner, always (0, 0)
    pub fn source(&self) -> Position {
        self.source
    }

    /// Target corner, (height - 1, width - 1)
    pub fn target(&self) -> Position {
        self.target
    }

    /// Search counters
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best known distance to `pos`; `f64::INFINITY` if unreached
    pub fn distance(&self, pos: Position) -> SeamResult<f64> {
        Ok(self.distance.get(pos)?)
    }

    /// Cell from which the best distance to `pos` was reached
    ///
    /// `None` for the source and for unreached cells.
    pub fn predecessor(&self, pos: Position) -> SeamResult<Option<Position>> {
        Ok(self.predecessor.get(pos)?)
    }

    /// True if `pos` is inside the grid and was reached
    pub fn has_path_to(&self, pos: Position) -> bool {
        self.distance.get(pos).is_ok_and(|d| d < f64::INFINITY)
    }

    /// Follow predecessors back from `pos` to the source
    ///
    /// Returns `None` if `pos` is out of bounds or unreached. The path is
    /// minimal only for cells whose distance was final when the search
    /// stopped, which always includes the target.
    pub fn path_to(&self, pos: Position) -> Option<Seam> {
        if !self.has_path_to(pos) {
            return None;
        }
        let mut reverse = vec![pos];
        let mut current = pos;
        while let Some(prev) = self.predecessor.get_unchecked(current) {
            reverse.push(prev);
            current = prev;
        }
        reverse.reverse();
        Some(Seam::from_positions(reverse))
    }

    /// The minimal seam from source to target, if one exists
    pub fn seam(&self) -> Option<Seam> {
        self.path_to(self.target)
    }

    /// Cost of the minimal seam; `f64::INFINITY` if there is none
    pub fn total_cost(&self) -> f64 {
        self.distance.get_unchecked(self.target)
    }
}

/// Run the search on a `width` x `height` grid
///
/// Costs are evaluated once per cell and validated before the search
/// starts.
///
/// # Errors
///
/// Returns `SeamError::Core` for zero dimensions, a cost model defined on
/// a grid of another size, or an invalid (negative or NaN) cost.
pub fn search<M>(
    width: u32,
    height: u32,
    model: &M,
    options: &SeamOptions,
) -> SeamResult<ShortestPathTree>
where
    M: CostModel + ?Sized,
{
    let costs = evaluate_costs(width, height, model)?;
    let mut distance = Grid::new(width, height, f64::INFINITY)?;
    let mut predecessor: Grid<Option<Position>> = Grid::new(width, height, None)?;

    let source = Position::new(0, 0);
    let target = Position::new(height - 1, width - 1);
    let mut stats = SearchStats::default();

    distance.set_unchecked(source, 0.0);
    let mut frontier = Frontier::new(options.tie_break);
    frontier.push(source, 0.0);

    while let Some(current) = next_current(&mut frontier, &distance, &mut stats) {
        if current == target {
            break;
        }
        stats.settled += 1;

        let base = distance.get_unchecked(current);
        for n in neighbors(current, width, height, Connectivity::EightWay) {
            let candidate = base + costs.get_unchecked(n);
            if candidate < distance.get_unchecked(n) {
                distance.set_unchecked(n, candidate);
                predecessor.set_unchecked(n, Some(current));
                frontier.push(n, candidate);
            }
        }
    }
    stats.pushed = frontier.pushed();

    debug!(
        "seam search {}x{}: settled={} stale={} pushed={} cost={}",
        width,
        height,
        stats.settled,
        stats.stale,
        stats.pushed,
        distance.get_unchecked(target)
    );

    Ok(ShortestPathTree {
        distance,
        predecessor,
        source,
        target,
        stats,
    })
}

/// Pop until a live entry turns up
fn next_current(
    frontier: &mut Frontier,
    distance: &Grid<f64>,
    stats: &mut SearchStats,
) -> Option<Position> {
    while let Some((pos, d)) = frontier.pop() {
        if d > distance.get_unchecked(pos) {
            stats.stale += 1;
            continue;
        }
        return Some(pos);
    }
    None
}

/// Find the minimum-cost seam on a `width` x `height` grid
///
/// # Errors
///
/// Returns `SeamError::NoPath` if the target is unreachable (only
/// possible when the model marks cells impassable with infinite cost),
/// and `SeamError::Core` for invalid dimensions or costs.
pub fn find_seam<M>(width: u32, height: u32, model: &M, options: &SeamOptions) -> SeamResult<Seam>
where
    M: CostModel + ?Sized,
{
    let tree = search(width, height, model, options)?;
    tree.seam().ok_or(SeamError::NoPath { width, height })
}
