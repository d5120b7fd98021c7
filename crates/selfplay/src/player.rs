//! Anything that can pick a move for the side to move

use chess_rules::GameState;
use random_mover::{Choice, RandomMover};

pub trait Player {
    fn name(&self) -> &str;

    /// Called before each game.
    fn new_game(&mut self) {}

    /// `None` when the player has no move to offer.
    fn choose_move(&mut self, game: &GameState) -> Option<Choice>;
}

impl Player for RandomMover {
    fn name(&self) -> &str {
        "random"
    }

    fn new_game(&mut self) {
        self.reset();
    }

    fn choose_move(&mut self, game: &GameState) -> Option<Choice> {
        self.choose(game)
    }
}
