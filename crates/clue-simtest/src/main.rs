//! Clue Board Headless Harness
//!
//! Loads a legend and layout, optionally answers one movement query, and
//! sweeps the board checking adjacency and target invariants.
//! Runs entirely in-process — no rendering, no players.
//!
//! Usage:
//!   cargo run -p clue-simtest
//!   cargo run -p clue-simtest -- --row 5 --col 2 --steps 3
//!   cargo run -p clue-simtest -- --layout my.csv --legend my.txt --verbose

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clue_logic::board::Board;
use clue_logic::cell::{BoardCell, CellKind, Position};
use clue_logic::config::BoardConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

// ── Bundled board (same files the integration tests use) ────────────────
const LAYOUT: &str = include_str!("../../../data/ClueLayout.csv");
const LEGEND: &str = include_str!("../../../data/ClueLegend.txt");

#[derive(Parser, Debug)]
#[command(
    name = "clue-simtest",
    version,
    about = "Load a Clue board and check movement rules"
)]
struct Cli {
    /// Board layout file (defaults to the bundled board)
    #[arg(long, value_name = "FILE", requires = "legend")]
    layout: Option<PathBuf>,
    /// Room legend file
    #[arg(long, value_name = "FILE", requires = "layout")]
    legend: Option<PathBuf>,
    /// JSON board config (overrides --layout/--legend)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["layout", "legend"])]
    config: Option<PathBuf>,
    /// Start row for a movement query
    #[arg(long, requires_all = ["col", "steps"])]
    row: Option<usize>,
    /// Start column for a movement query
    #[arg(long, requires_all = ["row", "steps"])]
    col: Option<usize>,
    /// Steps for a movement query
    #[arg(long, requires_all = ["row", "col"])]
    steps: Option<usize>,
    /// Random start cells to sample in the sweep
    #[arg(long, default_value_t = 200)]
    samples: usize,
    /// Seed for the sweep sampler
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Print the movement query result as JSON
    #[arg(long)]
    json: bool,
    /// Print the board before running
    #[arg(long)]
    show_board: bool,
    /// Show passing checks too
    #[arg(long)]
    verbose: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

#[derive(Serialize)]
struct QueryReport<'a> {
    start: Position,
    steps: usize,
    start_cell: &'a BoardCell,
    targets: Vec<&'a BoardCell>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut board = load_board(&cli)?;

    if cli.show_board {
        print!("{}", board.grid().render());
        println!();
    }

    if let (Some(row), Some(col), Some(steps)) = (cli.row, cli.col, cli.steps) {
        run_query(&mut board, row, col, steps, cli.json)?;
        if cli.json {
            return Ok(());
        }
    }

    println!("=== Clue Board Harness ===\n");
    let mut results = Vec::new();

    // 1. Layout and legend consistency
    results.extend(validate_layout(&board));

    // 2. Adjacency rules over every cell
    results.extend(validate_adjacency(&board));

    // 3. Target invariants on sampled starts
    results.extend(validate_targets(&board, cli.samples, cli.seed));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || cli.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn load_board(cli: &Cli) -> anyhow::Result<Board> {
    if let Some(path) = &cli.config {
        let config = BoardConfig::load(path)?;
        return Board::initialize(&config)
            .with_context(|| format!("loading board from {}", path.display()));
    }
    match (&cli.layout, &cli.legend) {
        (Some(layout), Some(legend)) => {
            let config = BoardConfig::new(layout, legend);
            Board::initialize(&config).context("loading board files")
        }
        _ => Board::from_sources(LEGEND, LAYOUT).context("loading bundled board"),
    }
}

fn run_query(
    board: &mut Board,
    row: usize,
    col: usize,
    steps: usize,
    json: bool,
) -> anyhow::Result<()> {
    let (rows, cols) = board.dimensions();
    if row >= rows || col >= cols {
        anyhow::bail!("({}, {}) is outside the {}×{} board", row, col, rows, cols);
    }

    board.compute_targets(row, col, steps);
    let mut targets: Vec<&BoardCell> = board.targets().into_iter().collect();
    targets.sort_by_key(|c| c.pos);

    let Some(start_cell) = board.cell_at(row, col) else {
        anyhow::bail!("({}, {}) has no cell", row, col);
    };

    if json {
        let report = QueryReport {
            start: start_cell.pos,
            steps,
            start_cell,
            targets,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let room = board.room_name(start_cell).unwrap_or("?");
    println!(
        "--- Targets from ({}, {}) [{}] in {} steps: {} ---",
        row,
        col,
        room,
        steps,
        targets.len()
    );
    for t in &targets {
        let label = if t.is_doorway() {
            format!("door into {}", board.room_name(t).unwrap_or("?"))
        } else {
            "walkway".to_string()
        };
        println!("  ({:>2}, {:>2})  {}", t.row(), t.col(), label);
    }
    println!();
    Ok(())
}

// ── 1. Layout ───────────────────────────────────────────────────────────

fn validate_layout(board: &Board) -> Vec<TestResult> {
    println!("--- Layout ---");
    let mut results = Vec::new();
    let (rows, cols) = board.dimensions();

    results.push(TestResult {
        name: "layout_dimensions".into(),
        passed: rows > 0 && cols > 0 && board.grid().len() == rows * cols,
        detail: format!("{}×{} ({} cells)", rows, cols, board.grid().len()),
    });

    let unknown: Vec<_> = board
        .grid()
        .iter()
        .filter(|c| board.room_name(c).is_none())
        .collect();
    results.push(TestResult {
        name: "layout_codes_in_legend".into(),
        passed: unknown.is_empty(),
        detail: if unknown.is_empty() {
            format!("{} legend entries cover every cell", board.legend().len())
        } else {
            format!("{} cells with unknown codes", unknown.len())
        },
    });

    let walkway = board.legend().walkway_code();
    results.push(TestResult {
        name: "legend_has_walkway".into(),
        passed: walkway.is_some(),
        detail: match walkway {
            Some(c) => format!("walkway code '{}'", c),
            None => "no Walkway entry".into(),
        },
    });

    let doors: Vec<_> = board.grid().doorways().collect();
    let off_board: Vec<_> = doors
        .iter()
        .filter(|d| {
            d.door_direction()
                .and_then(|dir| board.grid().step(d.pos, dir))
                .is_none()
        })
        .collect();
    results.push(TestResult {
        name: "doors_open_onto_board".into(),
        passed: off_board.is_empty(),
        detail: format!(
            "{} doorways, {} facing off the board",
            doors.len(),
            off_board.len()
        ),
    });

    let rooms_with_doors: HashSet<char> = doors.iter().map(|d| d.initial).collect();
    let card_rooms = board.legend().card_rooms();
    let mut doorless: Vec<&str> = board
        .legend()
        .iter()
        .filter(|(code, _)| Some(*code) != walkway && !rooms_with_doors.contains(code))
        .map(|(_, e)| e.name.as_str())
        .filter(|name| card_rooms.contains(name))
        .collect();
    doorless.sort_unstable();
    results.push(TestResult {
        name: "card_rooms_reachable".into(),
        passed: doorless.is_empty(),
        detail: if doorless.is_empty() {
            format!("{} card rooms all have a doorway", card_rooms.len())
        } else {
            format!("no doorway into: {}", doorless.join(", "))
        },
    });

    results
}

// ── 2. Adjacency ────────────────────────────────────────────────────────

fn validate_adjacency(board: &Board) -> Vec<TestResult> {
    println!("--- Adjacency ---");
    let mut results = Vec::new();

    let mut room_leaks = 0;
    let mut bad_doors = 0;
    let mut bad_walkways = 0;

    for cell in board.grid().iter() {
        let next = board.adj_list(cell);
        match cell.kind {
            CellKind::Room => {
                if !next.is_empty() {
                    room_leaks += 1;
                }
            }
            CellKind::Doorway(dir) => {
                let out = board.grid().step(cell.pos, dir);
                let ok = match out {
                    Some(p) => next.len() == 1 && next.iter().all(|c| c.pos == p),
                    None => next.is_empty(),
                };
                if !ok {
                    bad_doors += 1;
                }
            }
            CellKind::Walkway => {
                let ok = next.iter().all(|n| match n.kind {
                    CellKind::Walkway => true,
                    CellKind::Doorway(facing) => {
                        board.grid().step(n.pos, facing) == Some(cell.pos)
                    }
                    CellKind::Room => false,
                });
                if !ok {
                    bad_walkways += 1;
                }
            }
        }
    }

    results.push(TestResult {
        name: "rooms_not_walkable".into(),
        passed: room_leaks == 0,
        detail: format!("{} room cells with neighbours", room_leaks),
    });
    results.push(TestResult {
        name: "doors_single_exit".into(),
        passed: bad_doors == 0,
        detail: format!("{} doorways with a wrong exit", bad_doors),
    });
    results.push(TestResult {
        name: "walkways_enter_doors_from_front".into(),
        passed: bad_walkways == 0,
        detail: format!("{} walkways with an illegal neighbour", bad_walkways),
    });

    // Symmetry between walkways: if a→b then b→a.
    let asymmetric = board
        .grid()
        .iter()
        .filter(|c| c.is_walkway())
        .flat_map(|c| board.adj_list(c).into_iter().map(move |n| (c, n)))
        .filter(|(c, n)| n.is_walkway() && !board.adj_list(n).contains(c))
        .count();
    results.push(TestResult {
        name: "walkway_adjacency_symmetric".into(),
        passed: asymmetric == 0,
        detail: format!("{} one-way walkway edges", asymmetric),
    });

    results
}

// ── 3. Targets ──────────────────────────────────────────────────────────

fn validate_targets(board: &Board, samples: usize, seed: u64) -> Vec<TestResult> {
    println!("--- Targets ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(seed);

    let starts: Vec<&BoardCell> = board
        .grid()
        .iter()
        .filter(|c| c.kind != CellKind::Room)
        .collect();
    if starts.is_empty() {
        results.push(TestResult {
            name: "targets_have_starts".into(),
            passed: false,
            detail: "no walkway or doorway cells".into(),
        });
        return results;
    }

    let mut start_included = 0;
    let mut one_step_mismatch = 0;
    let mut illegal_stop = 0;
    let mut total_targets = 0usize;

    for _ in 0..samples {
        let start = starts[rng.gen_range(0..starts.len())];
        let steps = rng.gen_range(1..=6);
        let targets = board.find_targets(start.row(), start.col(), steps);
        total_targets += targets.len();

        if targets.contains(start) {
            start_included += 1;
        }
        if targets.iter().any(|t| t.kind == CellKind::Room) {
            illegal_stop += 1;
        }
        if board.find_targets(start.row(), start.col(), 1) != board.adj_list(start) {
            one_step_mismatch += 1;
        }
    }

    results.push(TestResult {
        name: "targets_exclude_start".into(),
        passed: start_included == 0,
        detail: format!("{} of {} samples contained the start", start_included, samples),
    });
    results.push(TestResult {
        name: "targets_one_step_is_neighbors".into(),
        passed: one_step_mismatch == 0,
        detail: format!("{} mismatches", one_step_mismatch),
    });
    results.push(TestResult {
        name: "targets_never_room_interior".into(),
        passed: illegal_stop == 0,
        detail: format!(
            "{} bad samples, mean {:.1} targets",
            illegal_stop,
            total_targets as f64 / samples.max(1) as f64
        ),
    });

    // Every target should be reachable in ≤ steps hops by BFS distance.
    let mut too_far = 0;
    for _ in 0..samples.min(50) {
        let start = starts[rng.gen_range(0..starts.len())];
        let steps = rng.gen_range(1..=6);
        let dist = bfs_distances(board, start.pos, steps);
        too_far += board
            .find_targets(start.row(), start.col(), steps)
            .iter()
            .filter(|t| dist.get(&t.pos).map_or(true, |&d| d > steps))
            .count();
    }
    results.push(TestResult {
        name: "targets_within_reach".into(),
        passed: too_far == 0,
        detail: format!("{} targets farther than the roll", too_far),
    });

    results
}

/// Shortest hop counts from `start`, up to `limit`.
fn bfs_distances(board: &Board, start: Position, limit: usize) -> HashMap<Position, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        if d == limit {
            continue;
        }
        for n in board.neighbors(p.row, p.col) {
            if !dist.contains_key(&n.pos) {
                dist.insert(n.pos, d + 1);
                queue.push_back(n.pos);
            }
        }
    }
    dist
}
