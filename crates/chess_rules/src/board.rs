use serde::{Deserialize, Serialize};

use crate::types::*;

/// Castling availability for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCastling {
    pub king_side: bool,
    pub queen_side: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideCastling,
    pub black: SideCastling,
}

impl CastlingRights {
    pub fn all() -> Self {
        let full = SideCastling {
            king_side: true,
            queen_side: true,
        };
        Self {
            white: full,
            black: full,
        }
    }

    pub fn none() -> Self {
        let empty = SideCastling {
            king_side: false,
            queen_side: false,
        };
        Self {
            white: empty,
            black: empty,
        }
    }

    pub fn side(&self, c: Color) -> SideCastling {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn side_mut(&mut self, c: Color) -> &mut SideCastling {
        match c {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Revoke rights after `piece` moved away from `from`.
    ///
    /// Any king move clears both sides; a rook leaving its home corner clears that side.
    /// Rights are never restored.
    pub fn update_after_move(&mut self, piece: Piece, from: Position) {
        let side = self.side_mut(piece.color);
        match piece.kind {
            PieceKind::King => {
                side.king_side = false;
                side.queen_side = false;
            }
            PieceKind::Rook if from.row() == piece.color.home_row() => match from.col() {
                0 => side.queen_side = false,
                7 => side.king_side = false,
                _ => {}
            },
            _ => {}
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// The most recently applied move; only consulted for en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
}

impl LastMove {
    /// True when this was a pawn advancing two rows.
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}

pub type Cell = Option<Piece>;

/// 8x8 mailbox board. `Copy`, so scratch boards live on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[0][col] = Some(Piece::new(Color::Black, kind));
            b.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.cells[7][col] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    pub fn piece_at(&self, pos: Position) -> Cell {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    pub fn set_piece(&mut self, pos: Position, pc: Cell) {
        self.cells[pos.row() as usize][pos.col() as usize] = pc;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Builder-style placement, handy for setting up positions.
    pub fn with(mut self, pos: Position, pc: Piece) -> Self {
        self.set_piece(pos, Some(pc));
        self
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|pc| (pos, pc)))
    }

    pub fn king_position(&self, c: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// Move `piece` on a scratch copy the way the legality check needs it.
    ///
    /// A pawn landing diagonally on an empty square also removes the pawn beside
    /// its origin on the destination file. The castling rook is left where it is.
    pub fn simulate(&self, from: Position, to: Position, piece: Piece) -> Board {
        let mut scratch = *self;
        if is_en_passant(self, from, to, piece) {
            if let Some(victim) = Position::new(from.row(), to.col()) {
                scratch.set_piece(victim, None);
            }
        }
        scratch.set_piece(to, Some(piece));
        scratch.set_piece(from, None);
        scratch
    }

    /// Fully apply a move: en passant victim, castling rook and promotion included.
    ///
    /// Returns the captured piece. Does nothing (and returns `None`) when `from` is empty.
    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Option<Piece> {
        let moved = self.piece_at(from)?;
        let mut captured = self.piece_at(to);

        if is_en_passant(self, from, to, moved) {
            if let Some(victim) = Position::new(from.row(), to.col()) {
                captured = self.piece_at(victim);
                self.set_piece(victim, None);
            }
        }

        if is_castle(from, to, moved) {
            // e->g moves the h rook to f, e->c moves the a rook to d
            let (rook_col, rook_to_col) = if to.col() == 6 { (7, 5) } else { (0, 3) };
            let rook_from = Position::new(to.row(), rook_col);
            let rook_to = Position::new(to.row(), rook_to_col);
            if let (Some(rf), Some(rt)) = (rook_from, rook_to) {
                let rook = self.piece_at(rf);
                self.set_piece(rf, None);
                self.set_piece(rt, rook);
            }
        }

        let placed = match promotion {
            Some(kind) if is_promotion(to, moved) => Piece::new(moved.color, kind),
            _ => moved,
        };
        self.set_piece(from, None);
        self.set_piece(to, Some(placed));
        captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let ch = cell.map(Piece::symbol).unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// A pawn moving to another file onto an empty square.
///
/// Only meaningful for moves the generator already produced, where that shape
/// can only be an en passant capture.
pub fn is_en_passant(board: &Board, from: Position, to: Position, piece: Piece) -> bool {
    piece.kind == PieceKind::Pawn && from.col() != to.col() && board.is_empty_at(to)
}

/// A king moving two files.
pub fn is_castle(from: Position, to: Position, piece: Piece) -> bool {
    piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2
}

/// A pawn reaching its last row.
pub fn is_promotion(to: Position, piece: Piece) -> bool {
    piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
