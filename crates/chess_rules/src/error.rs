//! Error types for the rules engine boundary.
//!
//! Move generation and terminal detection never fail; these cover parsing
//! notation, applying a move to a [`crate::GameState`], and save/load.

use thiserror::Error;

use crate::{
    outcome::GameOutcome,
    types::{Color, PieceKind, Position},
};

#[derive(Error, Debug)]
pub enum RulesError {
    /// Text that is not a square like "e4"
    #[error("Invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("No piece on {square}")]
    EmptySquare { square: Position },

    #[error("Piece on {square} belongs to {color}, but it is {turn}'s move")]
    WrongTurn {
        square: Position,
        color: Color,
        turn: Color,
    },

    #[error("Game is already over ({0:?})")]
    GameOver(GameOutcome),

    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("Move from {from} to {to} promotes; a promotion piece is required")]
    PromotionRequired { from: Position, to: Position },

    #[error("Move from {from} to {to} is not a promotion")]
    UnexpectedPromotion { from: Position, to: Position },

    #[error("Cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RulesResult<T> = Result<T, RulesError>;
