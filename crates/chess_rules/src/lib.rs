//! Legal-move chess rules engine.
//!
//! Every query is a pure function over a board snapshot plus the castling
//! rights and last move the caller passes in:
//! - [`pseudo_legal_moves`]: per-piece movement patterns, castling and en passant
//! - [`is_square_attacked`] / [`is_king_in_check`]: attack probing
//! - [`legal_moves`]: moves that do not leave the mover's king in check
//! - [`game_outcome`]: ongoing, checkmate or stalemate
//!
//! [`GameState`] is the caller-side aggregate that applies moves, keeps the
//! castling rights and last move current, and records notation.

pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod notation;
pub mod outcome;
pub mod perft;
pub mod types;

pub use attacks::*;
pub use board::*;
pub use error::*;
pub use game::*;
pub use legal::*;
pub use movegen::*;
pub use notation::*;
pub use outcome::*;
pub use perft::perft;
pub use types::*;
