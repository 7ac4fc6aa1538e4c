//! The board — loaded grid, legend and movement queries in one owned value.
//!
//! A `Board` only exists once both config files have loaded successfully, so
//! there is no half-initialized state to query. Adjacency is computed for the
//! whole grid at load time; all read queries take `&self`.
//!
//! ```no_run
//! use clue_logic::board::Board;
//! use clue_logic::config::BoardConfig;
//!
//! let mut board = Board::initialize(&BoardConfig::default())?;
//! let targets = board.compute_targets(5, 2, 3);
//! println!("{} places to move", targets.len());
//! # Ok::<(), clue_logic::error::BoardError>(())
//! ```

use std::collections::HashSet;

use crate::adjacency::AdjacencyMap;
use crate::cell::{BoardCell, Position};
use crate::config::BoardConfig;
use crate::constants::MAX_BOARD_SIZE;
use crate::error::Result;
use crate::grid::Grid;
use crate::legend::Legend;
use crate::targets;

#[derive(Debug, Clone)]
pub struct Board {
    legend: Legend,
    grid: Grid,
    adjacency: AdjacencyMap,
    /// Result of the last `compute_targets` call.
    targets: HashSet<Position>,
}

impl Board {
    /// Load the legend, then the layout, from the configured files.
    pub fn initialize(config: &BoardConfig) -> Result<Self> {
        let legend = Legend::load(&config.legend_path)?;
        let grid = Grid::load(&config.layout_path, &legend, config.max_dimension)?;
        Ok(Self::assemble(legend, grid))
    }

    /// Build a board from in-memory legend and layout text.
    pub fn from_sources(legend: &str, layout: &str) -> Result<Self> {
        Self::from_sources_with_limit(legend, layout, MAX_BOARD_SIZE)
    }

    pub fn from_sources_with_limit(legend: &str, layout: &str, max_dimension: usize) -> Result<Self> {
        let legend = Legend::parse(legend)?;
        let grid = Grid::parse(layout, &legend, max_dimension)?;
        Ok(Self::assemble(legend, grid))
    }

    fn assemble(legend: Legend, grid: Grid) -> Self {
        let adjacency = AdjacencyMap::build(&grid);
        log::info!(
            "Board ready: {}×{}, {} rooms in legend, {} walkable cells",
            grid.rows(),
            grid.cols(),
            legend.len(),
            adjacency.walkable_count()
        );
        Self {
            legend,
            grid,
            adjacency,
            targets: HashSet::new(),
        }
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// (rows, columns).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.rows(), self.grid.cols())
    }

    pub fn num_rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn num_columns(&self) -> usize {
        self.grid.cols()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&BoardCell> {
        self.grid.get(Position::new(row, col))
    }

    /// Room name for the cell's initial.
    pub fn room_name(&self, cell: &BoardCell) -> Option<&str> {
        self.legend.name(cell.initial)
    }

    /// Cells reachable in one step from `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    pub fn neighbors(&self, row: usize, col: usize) -> HashSet<&BoardCell> {
        let pos = self.grid.cell(Position::new(row, col)).pos;
        self.cells(self.adjacency.neighbors(pos))
    }

    /// Same as [`neighbors`](Self::neighbors), keyed by cell.
    pub fn adj_list(&self, cell: &BoardCell) -> HashSet<&BoardCell> {
        self.neighbors(cell.row(), cell.col())
    }

    /// Stopping cells for a token at `(row, col)` moving `steps`, without
    /// touching the stored target set.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    pub fn find_targets(&self, row: usize, col: usize, steps: usize) -> HashSet<&BoardCell> {
        let found = self.target_positions(row, col, steps);
        self.cells(&found)
    }

    /// Replace the stored target set with the targets for `(row, col)` and
    /// `steps`, and return them.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    pub fn compute_targets(&mut self, row: usize, col: usize, steps: usize) -> HashSet<&BoardCell> {
        self.targets = self.target_positions(row, col, steps);
        self.targets()
    }

    /// Targets from the most recent [`compute_targets`](Self::compute_targets).
    pub fn targets(&self) -> HashSet<&BoardCell> {
        self.cells(&self.targets)
    }

    fn target_positions(&self, row: usize, col: usize, steps: usize) -> HashSet<Position> {
        let start = Position::new(row, col);
        // Validates the start before walking.
        self.grid.cell(start);
        targets::find_targets(&self.grid, &self.adjacency, start, steps)
    }

    fn cells<'a>(&'a self, positions: &HashSet<Position>) -> HashSet<&'a BoardCell> {
        positions.iter().map(|&p| self.grid.cell(p)).collect()
    }
}
