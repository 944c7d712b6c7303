//! Streak Tic-Tac-Toe - terminal entry point
//!
//! Plays one game by default; `stats` and `init-stats` manage the stats file.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use streak_tictactoe::{
    ComputerPlayer, GameConfig, GameLoop, HeuristicMode, JsonStatsStore, StatsStore,
    TerminalConsole, ThinkDelay,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => play(game_config(cli.stats_path, args)),
        Command::Stats => show_stats(&cli.stats_path),
        Command::InitStats { force } => init_stats(&cli.stats_path, force),
    }
}

/// Logs go to a file so they never land on the game screen.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file '{}'", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn game_config(stats_path: std::path::PathBuf, args: PlayArgs) -> GameConfig {
    let mode = if args.prefer_wins {
        HeuristicMode::PreferWins
    } else {
        HeuristicMode::Faithful
    };
    GameConfig::new(
        stats_path,
        args.seed,
        ThinkDelay::from_millis(args.think_min_ms, args.think_max_ms),
        mode,
    )
}

/// Play one game
#[instrument(skip_all, fields(stats_path = %config.stats_path().display()))]
fn play(config: GameConfig) -> Result<()> {
    info!(seed = ?config.seed(), mode = %config.mode(), "Starting game");

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let computer = ComputerPlayer::new(*config.mode(), *config.think_delay(), rng);
    let mut console = TerminalConsole::new();
    let mut store = JsonStatsStore::new(config.stats_path());

    let outcome = GameLoop::new(computer, &mut console, &mut store)
        .run()
        .context("Game aborted")?;

    info!(?outcome, "Game finished");
    Ok(())
}

/// Print the stats file
#[instrument]
fn show_stats(stats_path: &Path) -> Result<()> {
    let stats = JsonStatsStore::new(stats_path)
        .load_stats()
        .context("Failed to read stats")?;
    println!("Games played:   {}", stats.games());
    println!("Current streak: {}", stats.win_streak().current());
    println!("Longest streak: {}", stats.win_streak().longest());
    Ok(())
}

/// Create a zeroed stats file
#[instrument]
fn init_stats(stats_path: &Path, force: bool) -> Result<()> {
    JsonStatsStore::new(stats_path)
        .init(force)
        .context("Failed to initialize stats")?;
    println!("Initialized {}", stats_path.display());
    Ok(())
}
