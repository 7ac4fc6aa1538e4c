//! Movement targets — every cell a token can finish on after a roll.
//!
//! Depth-first walk over the [`AdjacencyMap`] for exactly `steps` hops. A
//! cell is never revisited on the same path, but may appear on different
//! branches. Reaching a doorway ends that branch early.

use std::collections::HashSet;

use crate::adjacency::AdjacencyMap;
use crate::cell::Position;
use crate::grid::Grid;

/// Compute the legal stopping cells for a token at `start` moving `steps`.
///
/// The start cell is never a target. `steps == 0` yields no targets.
pub fn find_targets(
    grid: &Grid,
    adjacency: &AdjacencyMap,
    start: Position,
    steps: usize,
) -> HashSet<Position> {
    let mut targets = HashSet::new();
    if steps == 0 {
        return targets;
    }

    let mut visited = HashSet::new();
    visited.insert(start);
    walk(grid, adjacency, start, steps, &mut visited, &mut targets);

    log::debug!(
        "targets from ({}, {}) in {}: {} cells",
        start.row,
        start.col,
        steps,
        targets.len()
    );
    targets
}

fn walk(
    grid: &Grid,
    adjacency: &AdjacencyMap,
    from: Position,
    remaining: usize,
    visited: &mut HashSet<Position>,
    targets: &mut HashSet<Position>,
) {
    for &next in adjacency.neighbors(from) {
        if !visited.insert(next) {
            continue;
        }
        if remaining == 1 || grid.cell(next).is_doorway() {
            targets.insert(next);
        } else {
            walk(grid, adjacency, next, remaining - 1, visited, targets);
        }
        visited.remove(&next);
    }
}
