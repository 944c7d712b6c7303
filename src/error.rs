//! Top-level game error.

use crate::games::tictactoe::MoveError;
use crate::stats::StatsError;

/// Failure that ends a game early.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Reading or writing the stats file failed.
    #[display("{}", _0)]
    Stats(StatsError),

    /// Terminal input or output failed, including end of input.
    #[display("Console error: {}", _0)]
    Console(std::io::Error),

    /// A move could not be made; only `BoardFull` reaches here.
    #[display("Move error: {}", _0)]
    Move(MoveError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Stats(e) => Some(e),
            GameError::Console(e) => Some(e),
            GameError::Move(e) => Some(e),
        }
    }
}
