#![allow(dead_code)]

use chess_rules::{Board, Piece, Position};

/// Build a board from eight rows of diagram text, rank 8 first.
/// `.` is an empty square; letters are piece symbols (uppercase white).
pub fn board_from_diagram(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "diagram row {row} must have 8 squares");
        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece = Piece::from_symbol(ch)
                .unwrap_or_else(|| panic!("bad piece symbol {ch:?} in diagram"));
            let pos = Position::new(row as u8, col as u8).unwrap();
            board.set_piece(pos, Some(piece));
        }
    }
    board
}

pub fn sq(name: &str) -> Position {
    name.parse().unwrap()
}
