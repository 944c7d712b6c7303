//! Human player reading moves from the console.

use crate::GameError;
use crate::console::Console;
use crate::games::tictactoe::{Board, Position, parse_move};
use tracing::{info, instrument, warn};

/// Prompt shown before the player's move.
pub const MOVE_PROMPT: &str = "Make your move!";

/// Shown for every rejected line.
pub const INVALID_MOVE: &str = "That's not a valid move!";

/// Human player using line input.
#[derive(Debug, Clone, Default)]
pub struct HumanPlayer {
    rejected: usize,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines rejected so far in this game.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Prompts until a line names an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Console`] if input closes or output fails, and
    /// [`GameError::Move`] if the board has no empty cell left.
    #[instrument(skip(self, board, console))]
    pub fn next_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> Result<Position, GameError> {
        console.write_line(MOVE_PROMPT)?;
        loop {
            let line = console.read_line()?;
            match parse_move(&line, board) {
                Ok(pos) => {
                    info!(cell = pos.number(), "Player moved");
                    return Ok(pos);
                }
                Err(e) if !e.is_invalid_move() => {
                    warn!(error = %e, "No move possible");
                    return Err(e.into());
                }
                Err(e) => {
                    warn!(input = %line, error = %e, "Rejected player move");
                    self.rejected += 1;
                    console.write_line(INVALID_MOVE)?;
                }
            }
        }
    }
}
