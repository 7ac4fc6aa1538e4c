//! One-step adjacency over a loaded [`Grid`].
//!
//! Built once for every cell when the board loads; the grid is immutable, so
//! entries never change afterwards and lookups take `&self`.
//!
//! Rules:
//! 1. Room interior has no walkable neighbours.
//! 2. A doorway leads only to the cell it opens onto.
//! 3. A walkway leads to orthogonal walkways, and to doorways that open
//!    towards it. Entering a door from behind is not allowed.

use std::collections::HashSet;

use crate::cell::{CellKind, DoorDirection, Position};
use crate::grid::Grid;

#[derive(Debug, Clone)]
pub struct AdjacencyMap {
    cols: usize,
    /// Row-major, parallel to the grid cells.
    adj: Vec<HashSet<Position>>,
}

impl AdjacencyMap {
    pub fn build(grid: &Grid) -> Self {
        let adj = grid.iter().map(|cell| neighbors_of(grid, cell.pos)).collect();
        Self {
            cols: grid.cols(),
            adj,
        }
    }

    /// Positions reachable in one step from `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid the map was built from.
    pub fn neighbors(&self, pos: Position) -> &HashSet<Position> {
        let entry = pos
            .row
            .checked_mul(self.cols)
            .and_then(|base| base.checked_add(pos.col))
            .filter(|_| pos.col < self.cols)
            .and_then(|idx| self.adj.get(idx));
        match entry {
            Some(set) => set,
            None => panic!("no adjacency for ({}, {}): off the board", pos.row, pos.col),
        }
    }

    /// Number of cells with at least one neighbour.
    pub fn walkable_count(&self) -> usize {
        self.adj.iter().filter(|s| !s.is_empty()).count()
    }
}

fn neighbors_of(grid: &Grid, pos: Position) -> HashSet<Position> {
    let cell = grid.cell(pos);
    match cell.kind {
        CellKind::Room => HashSet::new(),
        CellKind::Doorway(dir) => grid.step(pos, dir).into_iter().collect(),
        CellKind::Walkway => DoorDirection::ALL
            .iter()
            .filter_map(|&dir| {
                let next = grid.step(pos, dir)?;
                enterable_from(grid, next, dir).then_some(next)
            })
            .collect(),
    }
}

/// Can a token on a walkway step into `target` while moving in `moving`?
fn enterable_from(grid: &Grid, target: Position, moving: DoorDirection) -> bool {
    match grid.cell(target).kind {
        CellKind::Walkway => true,
        // The door must open back towards the cell we came from.
        CellKind::Doorway(facing) => facing == moving.opposite(),
        CellKind::Room => false,
    }
}
