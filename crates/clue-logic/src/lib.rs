//! Pure board logic for a Clue-style game.
//!
//! Loads a room legend and a board layout from text, derives one-step
//! adjacency for every cell, and enumerates the cells a token can finish on
//! after a roll. No rendering, players, cards or dice: those live in the
//! callers, which only need the query surface on [`board::Board`].
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`adjacency`] | One-step adjacency: room, doorway and walkway rules |
//! | [`board`] | Owned board: loading, cell lookup, neighbour and target queries |
//! | [`cell`] | Positions, door directions, cell classification |
//! | [`config`] | File locations and size limit for loading a board |
//! | [`constants`] | Walkway label, door markers, size limit |
//! | [`error`] | Load-time error taxonomy |
//! | [`grid`] | Layout parsing and the rectangular cell matrix |
//! | [`legend`] | Room legend parsing (code → room name) |
//! | [`targets`] | Depth-first enumeration of movement targets |

pub mod adjacency;
pub mod board;
pub mod cell;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod legend;
pub mod targets;

pub use board::Board;
pub use cell::{BoardCell, CellKind, DoorDirection, Position};
pub use config::BoardConfig;
pub use error::{BoardError, FormatError};
