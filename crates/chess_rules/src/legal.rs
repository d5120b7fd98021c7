//! Legality filtering: pseudo-legal moves that keep the mover's king safe.

use crate::{
    attacks::is_king_in_check,
    board::{Board, CastlingRights, LastMove},
    movegen::{CastlingMode, pseudo_legal_moves},
    types::*,
};

/// Legal destinations for `piece` on `from`.
///
/// Each candidate is played on a scratch copy and dropped if the mover's king
/// is attacked afterwards. An empty list is a normal answer.
pub fn legal_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    rights: &CastlingRights,
    last_move: Option<&LastMove>,
) -> Vec<Position> {
    let mut out = pseudo_legal_moves(board, from, piece, CastlingMode::Allowed(rights), last_move);
    out.retain(|&to| {
        let scratch = board.simulate(from, to, piece);
        !is_king_in_check(&scratch, piece.color, last_move)
    });
    out
}

/// Every legal `(from, to)` pair for `c`, in board scan order.
pub fn all_legal_moves(
    board: &Board,
    c: Color,
    rights: &CastlingRights,
    last_move: Option<&LastMove>,
) -> Vec<(Position, Position)> {
    board
        .pieces()
        .filter(|(_, pc)| pc.color == c)
        .flat_map(|(from, pc)| {
            legal_moves(board, from, pc, rights, last_move)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Stops at the first piece of `c` that has somewhere to go.
pub fn has_legal_moves(
    board: &Board,
    c: Color,
    rights: &CastlingRights,
    last_move: Option<&LastMove>,
) -> bool {
    board
        .pieces()
        .filter(|(_, pc)| pc.color == c)
        .any(|(from, pc)| !legal_moves(board, from, pc, rights, last_move).is_empty())
}

#[cfg(test)]
#[path = "legal_tests.rs"]
mod legal_tests;
