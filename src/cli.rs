//! Command-line interface for streak_tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use streak_tictactoe::DEFAULT_STATS_PATH;

/// Streak Tic-Tac-Toe - beat the computer, keep your streak
#[derive(Parser, Debug)]
#[command(name = "streak_tictactoe")]
#[command(about = "Terminal tic-tac-toe against a beatable AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON stats file
    #[arg(long, global = true, default_value = DEFAULT_STATS_PATH)]
    pub stats_path: PathBuf,

    /// Log file (the terminal is reserved for the game)
    #[arg(long, global = true, default_value = "streak_tictactoe.log")]
    pub log_file: PathBuf,

    /// Subcommand to run; plays a game when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game against the computer
    Play(PlayArgs),

    /// Show games played and the win streak
    Stats,

    /// Write a zeroed stats file
    InitStats {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Options for a game.
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Seed for a reproducible computer
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shortest thinking pause in milliseconds
    #[arg(long, default_value = "500")]
    pub think_min_ms: u64,

    /// Longest thinking pause in milliseconds
    #[arg(long, default_value = "2000")]
    pub think_max_ms: u64,

    /// Let the computer complete its own lines before blocking yours
    #[arg(long)]
    pub prefer_wins: bool,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            seed: None,
            think_min_ms: 500,
            think_max_ms: 2000,
            prefer_wins: false,
        }
    }
}
