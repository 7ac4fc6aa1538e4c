//! Integration tests over the bundled board in `data/`.
//!
//! Exercises: BoardConfig → Legend → Grid → AdjacencyMap → targets
//!
//! The layout is 20×20 with eight card rooms, a closet, and eleven doorways.

use std::collections::HashSet;
use std::path::PathBuf;

use clue_logic::board::Board;
use clue_logic::cell::{BoardCell, CellKind, DoorDirection};
use clue_logic::config::BoardConfig;
use clue_logic::error::{BoardError, FormatError};
use clue_logic::legend::RoomKind;

// ── Helpers ────────────────────────────────────────────────────────────

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn bundled_board() -> Board {
    let config = BoardConfig::default().relative_to(data_dir());
    Board::initialize(&config).expect("bundled board loads")
}

fn positions(cells: &HashSet<&BoardCell>) -> HashSet<(usize, usize)> {
    cells.iter().map(|c| (c.row(), c.col())).collect()
}

fn set(cells: &[(usize, usize)]) -> HashSet<(usize, usize)> {
    cells.iter().copied().collect()
}

// ── Loading ────────────────────────────────────────────────────────────

#[test]
fn loads_bundled_files() {
    let board = bundled_board();
    assert_eq!(board.dimensions(), (20, 20));
    assert_eq!(board.num_rows(), 20);
    assert_eq!(board.num_columns(), 20);
}

#[test]
fn legend_contents() {
    let board = bundled_board();
    let legend = board.legend();
    assert_eq!(legend.len(), 10);
    assert_eq!(legend.name('K'), Some("Kitchen"));
    assert_eq!(legend.name('O'), Some("Lounge"));
    assert_eq!(legend.name('X'), Some("Closet"));
    assert_eq!(legend.walkway_code(), Some('W'));
    assert_eq!(legend.entry('X').map(|e| e.kind), Some(RoomKind::Other));
    assert_eq!(legend.card_rooms().len(), 8);
}

#[test]
fn doorway_count_and_directions() {
    let board = bundled_board();
    assert_eq!(board.grid().doorways().count(), 11);

    let expect = [
        ((4, 2), DoorDirection::Down),
        ((4, 15), DoorDirection::Left),
        ((2, 15), DoorDirection::Left),
        ((3, 9), DoorDirection::Down),
        ((9, 4), DoorDirection::Right),
        ((15, 3), DoorDirection::Up),
        ((17, 15), DoorDirection::Left),
    ];
    for ((row, col), dir) in expect {
        let cell = board.cell_at(row, col).unwrap();
        assert_eq!(cell.door_direction(), Some(dir), "door at ({row}, {col})");
    }
}

#[test]
fn cell_classification() {
    let board = bundled_board();
    assert_eq!(board.cell_at(0, 0).unwrap().kind, CellKind::Room);
    assert_eq!(board.cell_at(5, 5).unwrap().kind, CellKind::Walkway);
    // Room label marker is still room interior.
    let label = board.cell_at(1, 1).unwrap();
    assert_eq!(label.kind, CellKind::Room);
    assert_eq!(label.code(), "KN");
    assert_eq!(board.room_name(label), Some("Kitchen"));
    assert!(board.cell_at(20, 0).is_none());
}

#[test]
fn missing_file_is_not_found() {
    let config = BoardConfig::new(
        data_dir().join("data/NoSuchLayout.csv"),
        data_dir().join("data/ClueLegend.txt"),
    );
    let err = Board::initialize(&config).unwrap_err();
    assert!(matches!(err, BoardError::ConfigNotFound { .. }));
}

#[test]
fn bundled_layout_exceeds_small_limit() {
    let config = BoardConfig::default()
        .relative_to(data_dir())
        .with_max_dimension(10);
    let err = Board::initialize(&config).unwrap_err();
    assert!(matches!(
        err,
        BoardError::ConfigFormat(FormatError::TooLarge { max: 10, .. })
    ));
}

// ── Adjacency ──────────────────────────────────────────────────────────

#[test]
fn room_interiors_have_no_neighbors() {
    let board = bundled_board();
    for cell in board.grid().iter().filter(|c| c.kind == CellKind::Room) {
        assert!(board.adj_list(cell).is_empty(), "room cell {:?}", cell.pos);
    }
}

#[test]
fn doorways_lead_out_one_step() {
    let board = bundled_board();
    for door in board.grid().doorways() {
        let next = board.adj_list(door);
        assert_eq!(next.len(), 1, "door {:?}", door.pos);
        let out = board
            .grid()
            .step(door.pos, door.door_direction().unwrap())
            .unwrap();
        assert!(next.iter().all(|c| c.pos == out));
    }
}

#[test]
fn walkways_never_lead_into_room_interior() {
    let board = bundled_board();
    for cell in board.grid().iter().filter(|c| c.is_walkway()) {
        for n in board.adj_list(cell) {
            assert!(n.is_walkway() || n.is_doorway(), "{:?} -> {:?}", cell.pos, n.pos);
        }
    }
}

#[test]
fn walkway_next_to_front_of_door() {
    let board = bundled_board();
    assert_eq!(
        positions(&board.neighbors(4, 14)),
        set(&[(3, 14), (4, 13), (4, 15), (5, 14)])
    );
}

#[test]
fn door_cannot_be_entered_from_the_side() {
    let board = bundled_board();
    // (4,15) opens left; (5,15) sits below it.
    assert_eq!(
        positions(&board.neighbors(5, 15)),
        set(&[(5, 14), (5, 16), (6, 15)])
    );
}

#[test]
fn edge_and_corner_walkways() {
    let board = bundled_board();
    assert_eq!(positions(&board.neighbors(0, 5)), set(&[(0, 6), (1, 5)]));
    assert_eq!(positions(&board.neighbors(19, 5)), set(&[(18, 5), (19, 6)]));
}

// ── Targets ────────────────────────────────────────────────────────────

#[test]
fn one_step_targets_equal_neighbors() {
    let mut board = bundled_board();
    for (row, col) in [(5, 2), (9, 5), (13, 10), (14, 17), (4, 2), (12, 2)] {
        let expected = positions(&board.neighbors(row, col));
        assert_eq!(positions(&board.compute_targets(row, col, 1)), expected);
    }
}

#[test]
fn targets_below_kitchen() {
    let mut board = bundled_board();
    let targets = positions(&board.compute_targets(5, 2, 3));
    assert_eq!(
        targets,
        set(&[(4, 2), (5, 1), (5, 3), (5, 5), (6, 0), (6, 2), (6, 4)])
    );
}

#[test]
fn targets_leaving_room_through_door() {
    let mut board = bundled_board();
    let targets = positions(&board.compute_targets(4, 2, 3));
    assert_eq!(targets, set(&[(5, 0), (5, 4), (6, 1), (6, 3)]));
}

#[test]
fn targets_stop_at_door_early() {
    let mut board = bundled_board();
    let targets = positions(&board.compute_targets(14, 3, 2));
    assert_eq!(targets, set(&[(13, 2), (13, 4), (14, 1), (14, 5), (15, 3)]));

    let targets = positions(&board.compute_targets(5, 14, 2));
    assert!(targets.contains(&(4, 15)));
    assert_eq!(targets.len(), 8);
}

#[test]
fn targets_top_edge() {
    let mut board = bundled_board();
    let targets = positions(&board.compute_targets(0, 5, 4));
    assert_eq!(
        targets,
        set(&[(0, 7), (1, 6), (2, 5), (2, 7), (3, 6), (4, 5)])
    );
}

#[test]
fn targets_from_study_door() {
    let mut board = bundled_board();
    let targets = positions(&board.compute_targets(16, 10, 2));
    assert_eq!(targets, set(&[(14, 10), (15, 9), (15, 11)]));
}

#[test]
fn six_step_roll_open_floor() {
    let mut board = bundled_board();
    let targets = positions(&board.compute_targets(13, 10, 6));
    assert_eq!(targets.len(), 33);
    assert!(targets.contains(&(16, 10)));
    assert!(targets.contains(&(9, 12)));
    assert!(!targets.contains(&(13, 10)));
}

#[test]
fn start_never_a_target() {
    let board = bundled_board();
    for cell in board.grid().iter().filter(|c| c.kind != CellKind::Room) {
        for steps in 1..=6 {
            let targets = board.find_targets(cell.row(), cell.col(), steps);
            assert!(!targets.contains(cell), "{:?} in {}", cell.pos, steps);
        }
    }
}

#[test]
fn last_compute_wins() {
    let mut board = bundled_board();
    board.compute_targets(5, 2, 3);
    board.compute_targets(16, 10, 2);
    assert_eq!(
        positions(&board.targets()),
        set(&[(14, 10), (15, 9), (15, 11)])
    );
}
