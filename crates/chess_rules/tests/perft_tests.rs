use std::time::Instant;

use rayon::prelude::*;

use chess_rules::{perft, CastlingRights, Color, GameState};

mod common;
use common::board_from_diagram;

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 250_000;

struct Case {
    name: &'static str,
    game: GameState,
    depths: Vec<(u8, u64)>,
}

/// Published perft counts, limited to depths where castling through an
/// attacked square cannot occur.
fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "Starting position",
            game: GameState::new(),
            depths: vec![(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
        },
        Case {
            name: "Position 3",
            game: GameState::from_parts(
                board_from_diagram([
                    "........",
                    "..p.....",
                    "...p....",
                    "KP.....r",
                    ".R...p.k",
                    "........",
                    "....P.P.",
                    "........",
                ]),
                Color::White,
                CastlingRights::none(),
                None,
            ),
            depths: vec![(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
        },
    ]
}

#[test]
fn perft_known_counts() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    cases().par_iter().for_each(|case| {
        let case_start = Instant::now();
        let mut total_nodes: u64 = 0;

        for &(depth, expected) in &case.depths {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for {} (expected {} nodes); set {}=1 to run all.",
                    depth, case.name, expected, FULL_PERFT_ENV
                );
                continue;
            }
            let got = perft(&case.game, depth);
            assert!(
                got == expected,
                "Perft mismatch for {} at depth {}: expected {}, got {}",
                case.name,
                depth,
                expected,
                got
            );
            total_nodes += got;
        }

        println!(
            "{} done: total nodes {}, elapsed {:.3?}",
            case.name,
            total_nodes,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&GameState::new(), 0), 1);
}
