//! Draw detection and outcome evaluation for tic-tac-toe.

use super::super::{Board, GameOutcome, Mark};
use super::win::winner;
use tracing::instrument;

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    winner(board).is_none() && board.is_full()
}

/// Evaluates the board after a half-move. Wins take priority over a draw.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameOutcome {
    match winner(board) {
        Some(Mark::Player) => GameOutcome::PlayerWin,
        Some(Mark::Computer) => GameOutcome::ComputerWin,
        None if board.is_full() => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}
