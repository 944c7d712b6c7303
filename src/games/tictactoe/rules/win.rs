//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::lines::WINNING_LINES;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// All eight lines are scanned for the player before any are scanned for
/// the computer, so the player wins a contrived board where both sides
/// hold a line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::Player, Mark::Computer]
        .into_iter()
        .find(|&mark| WINNING_LINES.iter().any(|line| line.is_complete(board, mark)))
}
