//! Pseudo-legal move generation.
//!
//! Destinations obey each piece's movement pattern but may leave the mover's
//! own king in check; see [`crate::legal`] for the filtered list.

use crate::{
    board::{Board, CastlingRights, LastMove},
    types::*,
};

/// Whether castling destinations may be generated.
///
/// Attack probing uses `Excluded` so asking "is this square attacked" never
/// depends on castling legality.
#[derive(Clone, Copy, Debug)]
pub enum CastlingMode<'a> {
    Allowed(&'a CastlingRights),
    Excluded,
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Destinations `piece` standing on `from` can reach, ignoring self-check.
pub fn pseudo_legal_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    castling: CastlingMode<'_>,
    last_move: Option<&LastMove>,
) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    let c = piece.color;
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, from, c, last_move, &mut out),
        PieceKind::Knight => gen_steps(board, from, c, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(board, from, c, &DIAGONALS, &mut out),
        PieceKind::Rook => gen_slider(board, from, c, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, from, c, &ORTHOGONALS, &mut out);
            gen_slider(board, from, c, &DIAGONALS, &mut out);
        }
        PieceKind::King => {
            gen_steps(board, from, c, &KING_DELTAS, &mut out);
            if let CastlingMode::Allowed(rights) = castling {
                gen_castle(board, from, c, rights, &mut out);
            }
        }
    }
    out
}

fn is_enemy(board: &Board, pos: Position, c: Color) -> bool {
    matches!(board.piece_at(pos), Some(pc) if pc.color != c)
}

fn gen_pawn(
    board: &Board,
    from: Position,
    c: Color,
    last_move: Option<&LastMove>,
    out: &mut Vec<Position>,
) {
    let dir = c.pawn_direction();

    // forward 1, then forward 2 from the start row
    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty_at(one) {
            out.push(one);
            if from.row() == c.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty_at(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    // captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if is_enemy(board, to, c) {
                out.push(to);
            }
        }
    }

    // en passant: an enemy pawn just jumped two rows to land beside us
    if from.row() == c.en_passant_row() {
        if let Some(lm) = last_move {
            if lm.is_double_pawn_push()
                && lm.piece.color != c
                && lm.to.row() == from.row()
                && lm.to.col().abs_diff(from.col()) == 1
            {
                if let Some(to) = lm.to.offset(dir, 0) {
                    if board.is_empty_at(to) {
                        out.push(to);
                    }
                }
            }
        }
    }
}

fn gen_steps(
    board: &Board,
    from: Position,
    c: Color,
    deltas: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(
    board: &Board,
    from: Position,
    c: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

/// Castling needs the king on e1/e8, the right still held, the own rook on its
/// corner and every square between them empty.
///
/// Squares the king crosses are checked for emptiness only, not for attack.
fn gen_castle(
    board: &Board,
    from: Position,
    c: Color,
    rights: &CastlingRights,
    out: &mut Vec<Position>,
) {
    let home = c.home_row();
    if from.row() != home || from.col() != 4 {
        return;
    }
    let side = rights.side(c);
    let rook = Piece::new(c, PieceKind::Rook);
    let clear = |cols: &[u8]| {
        cols.iter().all(|&col| {
            Position::new(home, col)
                .map(|pos| board.is_empty_at(pos))
                .unwrap_or(false)
        })
    };
    let rook_on = |col: u8| {
        Position::new(home, col)
            .map(|pos| board.piece_at(pos) == Some(rook))
            .unwrap_or(false)
    };

    if side.king_side && clear(&[5, 6]) && rook_on(7) {
        if let Some(to) = Position::new(home, 6) {
            out.push(to);
        }
    }
    if side.queen_side && clear(&[1, 2, 3]) && rook_on(0) {
        if let Some(to) = Position::new(home, 2) {
            out.push(to);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
