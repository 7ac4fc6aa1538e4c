//! Cell model — one grid position and its classification.

use serde::{Deserialize, Serialize};

use crate::constants::door_markers;

/// Grid coordinates. Row-major, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Side of the room a doorway opens onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorDirection {
    Up,
    Down,
    Left,
    Right,
}

impl DoorDirection {
    pub const ALL: [DoorDirection; 4] = [
        DoorDirection::Up,
        DoorDirection::Down,
        DoorDirection::Left,
        DoorDirection::Right,
    ];

    /// Parse a layout marker. Only the arrow forms are door markers; letters
    /// are left for room codes and label markers.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            door_markers::UP => Some(DoorDirection::Up),
            door_markers::DOWN => Some(DoorDirection::Down),
            door_markers::LEFT => Some(DoorDirection::Left),
            door_markers::RIGHT => Some(DoorDirection::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            DoorDirection::Up => DoorDirection::Down,
            DoorDirection::Down => DoorDirection::Up,
            DoorDirection::Left => DoorDirection::Right,
            DoorDirection::Right => DoorDirection::Left,
        }
    }

    /// (row, col) offset of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            DoorDirection::Up => (-1, 0),
            DoorDirection::Down => (1, 0),
            DoorDirection::Left => (0, -1),
            DoorDirection::Right => (0, 1),
        }
    }

    pub fn marker(self) -> char {
        match self {
            DoorDirection::Up => door_markers::UP,
            DoorDirection::Down => door_markers::DOWN,
            DoorDirection::Left => door_markers::LEFT,
            DoorDirection::Right => door_markers::RIGHT,
        }
    }
}

/// Derived classification of a cell.
///
/// A doorway always carries its direction, so "doorway without a direction"
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Room,
    Walkway,
    Doorway(DoorDirection),
}

/// One grid position. Immutable after the grid is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCell {
    pub pos: Position,
    /// Room identity code (first character of the raw code).
    pub initial: char,
    /// Optional second character of the raw code.
    pub marker: Option<char>,
    pub kind: CellKind,
}

impl BoardCell {
    /// Classify a raw layout code.
    ///
    /// A direction marker makes the cell a doorway. Otherwise the walkway code
    /// makes it a walkway, and anything else is room interior.
    pub fn new(pos: Position, initial: char, marker: Option<char>, walkway: Option<char>) -> Self {
        let kind = match marker.and_then(DoorDirection::from_marker) {
            Some(dir) => CellKind::Doorway(dir),
            None if Some(initial) == walkway => CellKind::Walkway,
            None => CellKind::Room,
        };
        Self {
            pos,
            initial,
            marker,
            kind,
        }
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub fn is_walkway(&self) -> bool {
        self.kind == CellKind::Walkway
    }

    pub fn is_doorway(&self) -> bool {
        matches!(self.kind, CellKind::Doorway(_))
    }

    /// Room interior or doorway, i.e. not walkway.
    pub fn is_room(&self) -> bool {
        !self.is_walkway()
    }

    pub fn door_direction(&self) -> Option<DoorDirection> {
        match self.kind {
            CellKind::Doorway(dir) => Some(dir),
            _ => None,
        }
    }

    /// Raw layout code as it appeared in the source.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.initial);
        if let Some(m) = self.marker {
            code.push(m);
        }
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(code: &str) -> BoardCell {
        let mut chars = code.chars();
        let initial = chars.next().unwrap();
        BoardCell::new(Position::new(2, 3), initial, chars.next(), Some('W'))
    }

    #[test]
    fn test_walkway() {
        let c = cell("W");
        assert!(c.is_walkway());
        assert!(!c.is_room());
        assert!(!c.is_doorway());
        assert_eq!(c.door_direction(), None);
    }

    #[test]
    fn test_room_interior() {
        let c = cell("K");
        assert_eq!(c.kind, CellKind::Room);
        assert!(c.is_room());
        assert!(!c.is_doorway());
    }

    #[test]
    fn test_arrow_markers() {
        assert_eq!(cell("K^").door_direction(), Some(DoorDirection::Up));
        assert_eq!(cell("Kv").door_direction(), Some(DoorDirection::Down));
        assert_eq!(cell("K<").door_direction(), Some(DoorDirection::Left));
        assert_eq!(cell("K>").door_direction(), Some(DoorDirection::Right));
    }

    #[test]
    fn test_doubled_initial_is_room() {
        for code in ["RR", "DD", "LL", "UU", "KD", "KR"] {
            let c = cell(code);
            assert_eq!(c.kind, CellKind::Room, "{code}");
            assert_eq!(DoorDirection::from_marker(c.marker.unwrap()), None);
        }
    }

    #[test]
    fn test_doorway_is_room_side() {
        let c = cell("K>");
        assert!(c.is_doorway());
        assert!(c.is_room());
    }

    #[test]
    fn test_marker_beats_walkway_code() {
        let c = cell("W>");
        assert_eq!(c.kind, CellKind::Doorway(DoorDirection::Right));
    }

    #[test]
    fn test_label_marker_stays_room() {
        let c = cell("KN");
        assert_eq!(c.kind, CellKind::Room);
        assert_eq!(c.code(), "KN");
    }

    #[test]
    fn test_direction_helpers() {
        for dir in DoorDirection::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(DoorDirection::from_marker(dir.marker()), Some(dir));
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }
}
