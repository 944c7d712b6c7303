//! Heuristic computer player.

use crate::GameError;
use crate::config::ThinkDelay;
use crate::console::Console;
use crate::games::tictactoe::{Board, ComputerMove, HeuristicMode, RecognizedLines, choose_move};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Shown while the computer "thinks".
pub const THINKING: &str = "The AI is making a move...";

/// The computer side: its recognized lines, heuristic mode and randomness.
#[derive(Debug)]
pub struct ComputerPlayer<R> {
    recognized: RecognizedLines,
    mode: HeuristicMode,
    think_delay: ThinkDelay,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Samples this game's recognized lines from `rng` and keeps it.
    #[instrument(skip(rng))]
    pub fn new(mode: HeuristicMode, think_delay: ThinkDelay, mut rng: R) -> Self {
        let recognized = RecognizedLines::sample(&mut rng);
        Self::with_lines(recognized, mode, think_delay, rng)
    }

    /// Uses an explicit set of recognized lines.
    pub fn with_lines(
        recognized: RecognizedLines,
        mode: HeuristicMode,
        think_delay: ThinkDelay,
        rng: R,
    ) -> Self {
        info!(recognized = recognized.len(), mode = %mode, "Creating computer player");
        Self {
            recognized,
            mode,
            think_delay,
            rng,
        }
    }

    /// Announces, pauses, then runs the heuristic.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Move`] on a full board and
    /// [`GameError::Console`] if output fails.
    #[instrument(skip(self, board, console))]
    pub fn next_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> Result<ComputerMove, GameError> {
        console.write_line(THINKING)?;
        let delay = self.think_delay.sample(&mut self.rng);
        debug!(delay_ms = delay.as_millis() as u64, "Thinking");
        console.pause(delay);

        let chosen = choose_move(board, &self.recognized, self.mode, &mut self.rng)?;
        info!(cell = chosen.position.number(), tier = %chosen.tier, "Computer moved");
        Ok(chosen)
    }
}
