//! Random Move Picker
//!
//! Selects moves uniformly at random from all legal moves of the side to move.
//! Useful for:
//! - Driving self-play games through the public rules API
//! - Stress testing move generation and terminal detection

use chess_rules::{is_promotion, GameState, PieceKind, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A move as a player submits it to [`GameState::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

/// Picks a uniformly random legal move.
///
/// No evaluation is done. Promotions pick uniformly among the four pieces.
#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: StdRng,
    picks: u64,
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            picks: 0,
        }
    }

    /// Reproducible sequence of picks for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            picks: 0,
        }
    }

    /// `None` when the side to move has no legal move.
    pub fn choose(&mut self, game: &GameState) -> Option<Choice> {
        let moves = game.all_legal_moves();
        let &(from, to) = moves.choose(&mut self.rng)?;
        let promotion = match game.board.piece_at(from) {
            Some(pc) if is_promotion(to, pc) => {
                PieceKind::PROMOTIONS.choose(&mut self.rng).copied()
            }
            _ => None,
        };
        self.picks += 1;
        Some(Choice {
            from,
            to,
            promotion,
        })
    }

    /// Number of moves picked so far.
    pub fn picks(&self) -> u64 {
        self.picks
    }

    pub fn reset(&mut self) {
        self.picks = 0;
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}
