//! Board constants — reserved legend labels, door markers, size limits.
//!
//! Plain constants with no I/O. Both the loaders and the harness use these.

/// Largest row or column count a layout may have by default.
pub const MAX_BOARD_SIZE: usize = 50;

/// Room name in the legend that marks the traversable walkway code.
pub const WALKWAY_NAME: &str = "Walkway";

/// Field separator between legend columns.
pub const LEGEND_SEPARATOR: &str = ", ";

/// Cell separator within a layout row.
pub const LAYOUT_SEPARATOR: char = ',';

/// Default file names for the bundled board data.
pub const DEFAULT_LAYOUT_FILE: &str = "data/ClueLayout.csv";
pub const DEFAULT_LEGEND_FILE: &str = "data/ClueLegend.txt";

pub mod kind_tags {
    /// Legend entries whose room becomes a playing card.
    pub const CARD: &str = "Card";
    /// Legend entries that are board-only (walkways, closets).
    pub const OTHER: &str = "Other";
}

pub mod door_markers {
    pub const UP: char = '^';
    pub const DOWN: char = 'v';
    pub const LEFT: char = '<';
    pub const RIGHT: char = '>';
}
