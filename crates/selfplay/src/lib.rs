//! Self-play driver for the chess rules engine
//!
//! This crate provides infrastructure for:
//! - Playing complete games between two [`Player`]s through [`chess_rules::GameState`]
//! - Classifying how each game ended (checkmate, stalemate, move limit)
//! - Saving session results and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Play 20 random games, capped at 300 plies each
//! cargo run -p selfplay -- --games 20 --max-plies 300
//!
//! # Reproducible session from a config file, results written to JSON
//! cargo run -p selfplay -- --config selfplay.toml --seed 7 --output results.json
//! ```

mod config;
mod player;
mod results;
mod runner;

pub use config::*;
pub use player::*;
pub use results::*;
pub use runner::*;
