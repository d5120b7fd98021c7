//! Self-play CLI
//!
//! Play random games through the rules engine and report how they ended.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use random_mover::RandomMover;
use selfplay::{SelfPlayConfig, SelfPlayRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play random-vs-random games and summarize the finishes.
#[derive(Debug, Parser)]
#[command(name = "selfplay", about)]
struct Cli {
    /// TOML config file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of games to play.
    #[arg(short, long)]
    games: Option<u32>,

    /// Half-moves per game before it is stopped.
    #[arg(short, long)]
    max_plies: Option<u32>,

    /// Seed for reproducible games.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the session results to this JSON file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only print the final report.
    #[arg(short, long, default_value = "false")]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<SelfPlayConfig> {
        let mut config = match &self.config {
            Some(path) => SelfPlayConfig::load(path)?,
            None => SelfPlayConfig::default(),
        };
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.quiet {
            config.verbose = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Cli::parse().into_config()?;

    let (mut white, mut black) = match config.seed {
        Some(seed) => (
            RandomMover::with_seed(seed),
            RandomMover::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomMover::new(), RandomMover::new()),
    };

    info!(
        games = config.games,
        max_plies = config.max_plies,
        seed = ?config.seed,
        "starting self-play"
    );
    let runner = SelfPlayRunner::new(config);
    let results = runner.run(&mut white, &mut black);
    results.print_report();

    if let Some(path) = &runner.config().output {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}
