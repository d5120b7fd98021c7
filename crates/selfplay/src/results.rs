//! Session results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use chess_rules::Color;

use crate::config::SelfPlayConfig;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to serialize results: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse results {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finish {
    Checkmate { winner: Color },
    Stalemate,
    /// Stopped at the ply limit with moves still available
    MoveLimit,
    /// A player offered no move or an illegal one
    Forfeit { loser: Color },
}

/// A single finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub finish: Finish,
    pub plies: u32,
    /// Moves in notation, in play order
    pub moves: Vec<String>,
}

/// Complete results of one self-play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResults {
    pub white: String,
    pub black: String,
    pub config: SelfPlayConfig,
    pub games: Vec<GameSummary>,
}

/// Tallies over all games in a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    pub move_limit: u32,
    pub forfeits: u32,
}

impl Tally {
    pub fn total_games(&self) -> u32 {
        self.white_wins + self.black_wins + self.stalemates + self.move_limit + self.forfeits
    }
}

impl SessionResults {
    pub fn new(white: &str, black: &str, config: SelfPlayConfig) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
            config,
            games: Vec::new(),
        }
    }

    pub fn add_game(&mut self, game: GameSummary) {
        self.games.push(game);
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for game in &self.games {
            match game.finish {
                Finish::Checkmate {
                    winner: Color::White,
                } => tally.white_wins += 1,
                Finish::Checkmate {
                    winner: Color::Black,
                } => tally.black_wins += 1,
                Finish::Stalemate => tally.stalemates += 1,
                Finish::MoveLimit => tally.move_limit += 1,
                Finish::Forfeit { .. } => tally.forfeits += 1,
            }
        }
        tally
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self).map_err(ResultsError::Serialize)?;
        std::fs::write(path, json).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ResultsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let tally = self.tally();
        let mut report = String::new();
        report.push_str(&format!(
            "=== Self-play: {} (white) vs {} (black) ===\n\n",
            self.white, self.black
        ));
        report.push_str(&format!(
            "Config: {} games, {} plies max\n\n",
            self.config.games, self.config.max_plies
        ));

        report.push_str(&format!(
            "{:<6} {:<12} {:>6}  {}\n",
            "Game", "Finish", "Plies", "Last moves"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');
        for (i, game) in self.games.iter().enumerate() {
            let finish = match game.finish {
                Finish::Checkmate {
                    winner: Color::White,
                } => "1-0",
                Finish::Checkmate {
                    winner: Color::Black,
                } => "0-1",
                Finish::Stalemate => "stalemate",
                Finish::MoveLimit => "move limit",
                Finish::Forfeit { .. } => "forfeit",
            };
            let tail_start = game.moves.len().saturating_sub(3);
            report.push_str(&format!(
                "{:<6} {:<12} {:>6}  {}\n",
                i + 1,
                finish,
                game.plies,
                game.moves[tail_start..].join(" ")
            ));
        }

        report.push('\n');
        report.push_str(&format!("White wins:  {}\n", tally.white_wins));
        report.push_str(&format!("Black wins:  {}\n", tally.black_wins));
        report.push_str(&format!("Stalemates:  {}\n", tally.stalemates));
        report.push_str(&format!("Move limit:  {}\n", tally.move_limit));
        if tally.forfeits > 0 {
            report.push_str(&format!("Forfeits:    {}\n", tally.forfeits));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
