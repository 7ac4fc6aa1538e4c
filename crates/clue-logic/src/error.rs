//! Load-time error taxonomy.
//!
//! Only loading can fail. Queries against a loaded [`Board`](crate::board::Board)
//! assume a consistent grid and do not re-validate.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for board loading.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors surfaced while initializing a board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A configuration file is missing or unreadable.
    #[error("config file `{}` could not be read: {source}", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A configuration file was read but is structurally invalid.
    #[error("bad config format: {0}")]
    ConfigFormat(#[from] FormatError),
    /// A JSON board config could not be parsed.
    #[error("bad board config: {0}")]
    Config(#[from] serde_json::Error),
}

impl BoardError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BoardError::ConfigNotFound { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, BoardError::ConfigFormat(_))
    }
}

/// Structural violations in legend or layout text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("legend line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("legend line {line}: kind `{tag}` is neither Card nor Other")]
    UnknownKind { line: usize, tag: String },
    #[error("legend line {line}: code `{code}` must be a single character")]
    BadLegendCode { line: usize, code: String },
    #[error("legend line {line}: code `{code}` defined twice")]
    DuplicateCode { line: usize, code: char },
    #[error("legend line {line}: second Walkway entry `{code}`, already defined as `{first}`")]
    DuplicateWalkway { line: usize, first: char, code: char },
    #[error("layout has no rows")]
    EmptyLayout,
    #[error("layout line {line}, column {col}: malformed cell code `{code}`")]
    BadCellCode {
        line: usize,
        col: usize,
        code: String,
    },
    #[error("layout line {line}, column {col}: room code `{code}` is not in the legend")]
    UnknownRoomCode { line: usize, col: usize, code: char },
    #[error("layout line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout is {rows}×{cols}, limit is {max}×{max}")]
    TooLarge { rows: usize, cols: usize, max: usize },
}
