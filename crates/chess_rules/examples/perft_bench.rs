//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth]
//!
//! Positions are reached by playing opening lines from the start, so no
//! position parser is needed.

use chess_rules::{perft, GameState};
use std::env;
use std::time::Instant;

/// Opening lines covering quiet, tactical and castling-ready positions
const TEST_LINES: &[(&str, &[(&str, &str)])] = &[
    ("Starting position", &[]),
    ("King's pawn", &[("e2", "e4"), ("e7", "e5")]),
    (
        "Italian",
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
        ],
    ),
    (
        "Sicilian",
        &[("e2", "e4"), ("c7", "c5"), ("g1", "f3"), ("d7", "d6")],
    ),
];

fn build(line: &[(&str, &str)]) -> GameState {
    let mut game = GameState::new();
    for (from, to) in line {
        let from = from.parse().expect("bad square in opening line");
        let to = to.parse().expect("bad square in opening line");
        game.play(from, to, None).expect("opening line must be legal");
    }
    game
}

fn main() {
    let depth: u8 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, line) in TEST_LINES {
        let game = build(line);

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&game, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
