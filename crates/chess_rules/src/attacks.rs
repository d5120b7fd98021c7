//! Attack detection on top of the move generator.
//!
//! No attack maps are maintained: each query scans the board and asks the
//! generator for every piece of the attacking color, with castling excluded.

use tracing::debug;

use crate::{
    board::{Board, LastMove},
    movegen::{CastlingMode, pseudo_legal_moves},
    types::*,
};

/// True if some piece of `by` can reach `target` on this board.
///
/// This is reachability through the generator, so a pawn's forward push counts
/// for an empty target. Queried on an occupied square it is plain attack.
pub fn is_square_attacked(
    board: &Board,
    target: Position,
    by: Color,
    last_move: Option<&LastMove>,
) -> bool {
    board
        .pieces()
        .filter(|(_, pc)| pc.color == by)
        .any(|(from, pc)| {
            pseudo_legal_moves(board, from, pc, CastlingMode::Excluded, last_move).contains(&target)
        })
}

/// True if `c`'s king is attacked. A board without that king is never in check.
pub fn is_king_in_check(board: &Board, c: Color, last_move: Option<&LastMove>) -> bool {
    match board.king_position(c) {
        Some(ksq) => is_square_attacked(board, ksq, c.other(), last_move),
        None => {
            debug!(color = %c, "no king on board, treating as not in check");
            false
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
