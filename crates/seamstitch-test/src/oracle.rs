//! Brute-force reference for the minimum seam cost
//!
//! Enumerates every simple 8-connected path from the top-left to the
//! bottom-right corner with a depth-first search, pruning partial paths
//! that already cost at least the best complete one. Intended for grids
//! up to about 4x4.

use seamstitch_core::{Connectivity, CostModel, Grid, Position, neighbors};

/// Minimum cost over all simple 8-connected corner-to-corner paths
///
/// The source cell is not counted; every other cell on the path is.
/// Returns `f64::INFINITY` for a zero-sized grid or when no path exists.
pub fn exhaustive_min_cost<M>(width: u32, height: u32, model: &M) -> f64
where
    M: CostModel + ?Sized,
{
    let Ok(mut visited) = Grid::new(width, height, false) else {
        return f64::INFINITY;
    };
    let source = Position::new(0, 0);
    let target = Position::new(height - 1, width - 1);
    visited.set_unchecked(source, true);

    let mut best = f64::INFINITY;
    walk(source, 0.0, target, model, &mut visited, &mut best);
    best
}

fn walk<M>(
    current: Position,
    cost: f64,
    target: Position,
    model: &M,
    visited: &mut Grid<bool>,
    best: &mut f64,
) where
    M: CostModel + ?Sized,
{
    if cost >= *best {
        return;
    }
    if current == target {
        *best = cost;
        return;
    }
    let (width, height) = visited.dimensions();
    for n in neighbors(current, width, height, Connectivity::EightWay) {
        if visited.get_unchecked(n) {
            continue;
        }
        visited.set_unchecked(n, true);
        walk(n, cost + model.cost(n), target, model, visited, best);
        visited.set_unchecked(n, false);
    }
}
