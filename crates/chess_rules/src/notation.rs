//! Algebraic notation and plain-language move descriptions.

use std::fmt;
use std::str::FromStr;

use crate::{
    board::is_castle,
    error::{RulesError, RulesResult},
    types::*,
};

const FILES: &[u8; 8] = b"abcdefgh";

/// `(0, 0)` is "a8", `(7, 7)` is "h1".
pub fn position_to_algebraic(pos: Position) -> String {
    let f = FILES[pos.col() as usize] as char;
    let r = (b'8' - pos.row()) as char;
    format!("{f}{r}")
}

pub fn algebraic_to_position(text: &str) -> RulesResult<Position> {
    let b = text.as_bytes();
    if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
        return Err(RulesError::InvalidSquare(text.to_string()));
    }
    let col = b[0] - b'a';
    let row = b'8' - b[1];
    Position::new(row, col).ok_or_else(|| RulesError::InvalidSquare(text.to_string()))
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&position_to_algebraic(*self))
    }
}

impl FromStr for Position {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_position(s)
    }
}

/// Short algebraic notation for a move made by `piece`.
///
/// Castling is written `O-O`/`O-O-O` with no suffix.
pub fn move_to_notation(mv: &Move, piece: Piece) -> String {
    if is_castle(mv.from, mv.to, piece) {
        let castle = if mv.to.col() == 6 { "O-O" } else { "O-O-O" };
        return castle.to_string();
    }

    let mut s = String::new();
    if let Some(letter) = piece.kind.letter() {
        s.push(letter);
    }
    if piece.kind == PieceKind::Pawn && mv.is_capture {
        s.push(FILES[mv.from.col() as usize] as char);
    }
    if mv.is_capture {
        s.push('x');
    }
    s.push_str(&position_to_algebraic(mv.to));
    if let Some(letter) = mv.promotion.and_then(PieceKind::letter) {
        s.push('=');
        s.push(letter);
    }
    if mv.is_checkmate {
        s.push('#');
    } else if mv.is_check {
        s.push('+');
    }
    s
}

/// e.g. "White knight from g1 to f3" or "Black pawn from e5 captures on d4".
pub fn move_description(piece: Piece, from: Position, to: Position, is_capture: bool) -> String {
    let verb = if is_capture { "captures on" } else { "to" };
    format!(
        "{} {} from {} {} {}",
        piece.color.title(),
        piece.kind.name(),
        from,
        verb,
        to
    )
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
