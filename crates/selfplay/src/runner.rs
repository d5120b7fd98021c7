//! Game runner for playing complete games between two players

use chess_rules::{Color, GameOutcome, GameState};
use tracing::{debug, info, warn};

use crate::config::SelfPlayConfig;
use crate::player::Player;
use crate::results::{Finish, GameSummary, SessionResults};

/// Runs self-play sessions
pub struct SelfPlayRunner {
    config: SelfPlayConfig,
}

impl SelfPlayRunner {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play `config.games` games with fixed colors.
    pub fn run(&self, white: &mut dyn Player, black: &mut dyn Player) -> SessionResults {
        let mut results = SessionResults::new(white.name(), black.name(), self.config.clone());

        for game_num in 0..self.config.games {
            let summary = self.play_game(white, black);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.games,
                    finish = ?summary.finish,
                    plies = summary.plies,
                    "game finished"
                );
            }
            results.add_game(summary);
        }

        results
    }

    /// Play a single game from the standard start.
    pub fn play_game(&self, white: &mut dyn Player, black: &mut dyn Player) -> GameSummary {
        let mut game = GameState::new();
        white.new_game();
        black.new_game();

        let finish = loop {
            match game.outcome() {
                GameOutcome::Checkmate => {
                    break Finish::Checkmate {
                        winner: game.turn.other(),
                    }
                }
                GameOutcome::Stalemate => break Finish::Stalemate,
                GameOutcome::Ongoing => {}
            }
            if game.ply() >= self.config.max_plies as usize {
                break Finish::MoveLimit;
            }

            let mover = game.turn;
            let player: &mut dyn Player = match mover {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let Some(choice) = player.choose_move(&game) else {
                warn!(player = player.name(), color = %mover, "no move offered in a live position");
                break Finish::Forfeit { loser: mover };
            };
            if let Err(e) = game.play(choice.from, choice.to, choice.promotion) {
                warn!(player = player.name(), color = %mover, error = %e, "illegal move offered");
                break Finish::Forfeit { loser: mover };
            }
        };

        debug!(?finish, plies = game.ply(), "game over");
        GameSummary {
            finish,
            plies: game.ply() as u32,
            moves: game.history.iter().map(|r| r.notation.clone()).collect(),
        }
    }
}

/// Quick utility to run a session with default settings
pub fn quick_session(
    white: &mut dyn Player,
    black: &mut dyn Player,
    games: u32,
    max_plies: u32,
) -> SessionResults {
    let config = SelfPlayConfig {
        games,
        max_plies,
        verbose: false,
        ..Default::default()
    };
    SelfPlayRunner::new(config).run(white, black)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
