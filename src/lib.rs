//! Streak Tic-Tac-Toe library - a beatable computer opponent
//!
//! A human plays tic-tac-toe in the terminal against a heuristic computer
//! that only recognizes a random subset of the winning lines, so it can be
//! beaten. A JSON stats file tracks games played and the player's win
//! streak.
//!
//! # Architecture
//!
//! - **Games**: board, win/draw rules and the computer's three-tier heuristic
//! - **Players**: human (console input) and computer (heuristic + pause)
//! - **Game loop**: turn sequencing and outcome reporting
//! - **Stats**: load/mutate/save of the persisted counters
//! - **Console**: terminal seam, swappable in tests
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use streak_tictactoe::{
//!     ComputerPlayer, GameLoop, HeuristicMode, JsonStatsStore, TerminalConsole, ThinkDelay,
//! };
//!
//! # fn example() -> Result<(), streak_tictactoe::GameError> {
//! let computer = ComputerPlayer::new(
//!     HeuristicMode::Faithful,
//!     ThinkDelay::default(),
//!     StdRng::seed_from_u64(7),
//! );
//! let mut console = TerminalConsole::new();
//! let mut store = JsonStatsStore::new("stats.json");
//! let outcome = GameLoop::new(computer, &mut console, &mut store).run()?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod error;
mod game_loop;
mod games;
mod players;
mod stats;

// Crate-level exports - Configuration
pub use config::{DEFAULT_STATS_PATH, GameConfig, ThinkDelay};

// Crate-level exports - Console seam
pub use console::{Console, TerminalConsole};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game loop
pub use game_loop::{GameLoop, INSTRUCTIONS, PRESS_ENTER, Phase};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, INVALID_MOVE, MOVE_PROMPT, THINKING};

// Crate-level exports - Stats
pub use stats::{
    InMemoryStatsStore, JsonStatsStore, Stats, StatsError, StatsErrorKind, StatsStore, WinStreak,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, ComputerMove, GameOutcome, HeuristicMode, Mark, MoveError, Position,
    RECOGNIZED_LINE_COUNT, RecognizedLines, Square, Tier, WINNING_LINES, WinningLine,
    choose_move, is_draw, outcome, parse_move, winner,
};

/// Heuristic tiers, callable one at a time.
pub mod heuristic {
    pub use crate::games::tictactoe::heuristic::{
        DIAGONAL_OFFSETS, EDGE_OFFSETS, adjacent_fill, near_complete_line, random_empty,
    };
}
