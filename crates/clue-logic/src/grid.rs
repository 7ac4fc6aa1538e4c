//! Board layout — a fixed rectangular matrix of [`BoardCell`]s.
//!
//! Source format: one row per line, comma-separated cell codes. A code is the
//! room initial from the legend, optionally followed by a door marker
//! (`^ v < >`) or a room-label marker. Trailing empty codes (`K,W,`) are
//! dropped; an empty code anywhere else is an error.
//!
//! ```text
//! KK,WK,W>,RR
//! ```

use std::path::Path;

use crate::cell::{BoardCell, DoorDirection, Position};
use crate::constants::LAYOUT_SEPARATOR;
use crate::error::{BoardError, FormatError, Result};
use crate::legend::Legend;

/// Loaded board layout. Dimensions never change after parsing.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major.
    cells: Vec<BoardCell>,
}

impl Grid {
    /// Parse layout text against a legend.
    pub fn parse(
        source: &str,
        legend: &Legend,
        max_dimension: usize,
    ) -> std::result::Result<Self, FormatError> {
        let walkway = legend.walkway_code();
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }

            let mut codes: Vec<&str> = text.split(LAYOUT_SEPARATOR).map(str::trim).collect();
            while codes.len() > 1 && codes.last() == Some(&"") {
                codes.pop();
            }
            if rows == 0 {
                cols = codes.len();
            } else if codes.len() != cols {
                return Err(FormatError::RaggedRow {
                    line,
                    expected: cols,
                    found: codes.len(),
                });
            }
            if rows >= max_dimension || cols > max_dimension {
                return Err(FormatError::TooLarge {
                    rows: rows + 1,
                    cols,
                    max: max_dimension,
                });
            }

            for (col, code) in codes.iter().enumerate() {
                let mut chars = code.chars();
                let (initial, marker) = match (chars.next(), chars.next(), chars.next()) {
                    (Some(i), m, None) => (i, m),
                    _ => {
                        return Err(FormatError::BadCellCode {
                            line,
                            col,
                            code: code.to_string(),
                        })
                    }
                };
                if !legend.contains(initial) {
                    return Err(FormatError::UnknownRoomCode {
                        line,
                        col,
                        code: initial,
                    });
                }
                cells.push(BoardCell::new(
                    Position::new(rows, col),
                    initial,
                    marker,
                    walkway,
                ));
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(FormatError::EmptyLayout);
        }

        let grid = Self { rows, cols, cells };
        for door in grid.doorways() {
            if let Some(dir) = door.door_direction() {
                if grid.step(door.pos, dir).is_none() {
                    log::warn!(
                        "doorway at ({}, {}) opens {:?} off the board",
                        door.row(),
                        door.col(),
                        dir
                    );
                }
            }
        }
        Ok(grid)
    }

    /// Read and parse a layout file.
    pub fn load(path: impl AsRef<Path>, legend: &Legend, max_dimension: usize) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| BoardError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::parse(&source, legend, max_dimension)?;
        log::info!(
            "Loaded layout {} ({}×{}, {} doorways)",
            path.display(),
            grid.rows,
            grid.cols,
            grid.doorways().count()
        );
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<&BoardCell> {
        if self.in_bounds(pos) {
            self.cells.get(self.index(pos))
        } else {
            None
        }
    }

    /// Cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn cell(&self, pos: Position) -> &BoardCell {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!(
                "cell ({}, {}) is outside the {}×{} board",
                pos.row, pos.col, self.rows, self.cols
            ),
        }
    }

    /// Neighbouring position one step in `dir`, if it is on the board.
    pub fn step(&self, pos: Position, dir: DoorDirection) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.in_bounds(next).then_some(next)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &BoardCell> {
        self.cells.iter()
    }

    pub fn doorways(&self) -> impl Iterator<Item = &BoardCell> {
        self.cells.iter().filter(|c| c.is_doorway())
    }

    /// Render the layout as one character per cell: door markers for
    /// doorways, `.` for walkway, the room initial otherwise.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                let ch = match cell.door_direction() {
                    Some(dir) => dir.marker(),
                    None if cell.is_walkway() => '.',
                    None => cell.initial,
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}
