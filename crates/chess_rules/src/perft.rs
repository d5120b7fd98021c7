use crate::{
    board::{is_promotion, Board, CastlingRights, LastMove},
    game::GameState,
    legal::all_legal_moves,
    types::*,
};

/// Pure perft node count.
/// Counts all legal positions from the given one down to `depth`, expanding
/// every promotion into its four choices.
pub fn perft(game: &GameState, depth: u8) -> u64 {
    fn inner(
        board: &Board,
        turn: Color,
        rights: &CastlingRights,
        last_move: Option<&LastMove>,
        depth: u8,
    ) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0u64;
        for (from, to) in all_legal_moves(board, turn, rights, last_move) {
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            let choices: &[Option<PieceKind>] = if is_promotion(to, piece) {
                &[
                    Some(PieceKind::Queen),
                    Some(PieceKind::Rook),
                    Some(PieceKind::Bishop),
                    Some(PieceKind::Knight),
                ]
            } else {
                &[None]
            };
            for &promo in choices {
                let mut next = *board;
                next.apply_move(from, to, promo);
                let mut next_rights = *rights;
                next_rights.update_after_move(piece, from);
                let lm = LastMove { from, to, piece };
                nodes += inner(&next, turn.other(), &next_rights, Some(&lm), depth - 1);
            }
        }
        nodes
    }

    inner(
        &game.board,
        game.turn,
        &game.castling,
        game.last_move.as_ref(),
        depth,
    )
}
