use serde::{Deserialize, Serialize};

use crate::{
    attacks::is_king_in_check,
    board::{Board, CastlingRights, LastMove},
    legal::has_legal_moves,
    types::Color,
};

/// Whether the side to move can continue. Derived on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::Ongoing
    }
}

/// Terminal status for `c` to move.
///
/// Ongoing as soon as one piece has a legal move; otherwise checkmate when the
/// king is attacked and stalemate when it is not.
pub fn game_outcome(
    board: &Board,
    c: Color,
    rights: &CastlingRights,
    last_move: Option<&LastMove>,
) -> GameOutcome {
    if has_legal_moves(board, c, rights, last_move) {
        GameOutcome::Ongoing
    } else if is_king_in_check(board, c, last_move) {
        GameOutcome::Checkmate
    } else {
        GameOutcome::Stalemate
    }
}
