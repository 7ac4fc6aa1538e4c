//! Board configuration — which files to load and how large a board may be.
//!
//! Set once before [`Board::initialize`](crate::board::Board::initialize).
//! Can be built in code or read from JSON:
//!
//! ```json
//! { "layout_path": "data/ClueLayout.csv", "legend_path": "data/ClueLegend.txt" }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LAYOUT_FILE, DEFAULT_LEGEND_FILE, MAX_BOARD_SIZE};
use crate::error::{BoardError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Comma-separated cell codes, one row per line.
    pub layout_path: PathBuf,
    /// `code, name, kind` lines.
    pub legend_path: PathBuf,
    /// Upper bound on rows and columns.
    pub max_dimension: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            layout_path: PathBuf::from(DEFAULT_LAYOUT_FILE),
            legend_path: PathBuf::from(DEFAULT_LEGEND_FILE),
            max_dimension: MAX_BOARD_SIZE,
        }
    }
}

impl BoardConfig {
    pub fn new(layout_path: impl Into<PathBuf>, legend_path: impl Into<PathBuf>) -> Self {
        Self {
            layout_path: layout_path.into(),
            legend_path: legend_path.into(),
            ..Self::default()
        }
    }

    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Resolve both file paths against `dir` (relative paths only).
    pub fn relative_to(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        if self.layout_path.is_relative() {
            self.layout_path = dir.join(&self.layout_path);
        }
        if self.legend_path.is_relative() {
            self.legend_path = dir.join(&self.legend_path);
        }
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BoardError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
