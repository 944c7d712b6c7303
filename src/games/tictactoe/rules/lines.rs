//! The eight winning lines of a 3x3 board.

use super::super::{Board, Mark, Position, Square};
use Position::*;

/// Three cells whose joint occupation by one mark wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Cells of the line in their listed order.
    pub fn cells(&self) -> [Position; 3] {
        self.0
    }

    /// Cell numbers of the line, e.g. `[1, 2, 3]`.
    pub fn numbers(&self) -> [i64; 3] {
        self.0.map(Position::number)
    }

    /// Number of cells in this line holding `mark`.
    pub fn count(&self, board: &Board, mark: Mark) -> usize {
        self.0
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(mark))
            .count()
    }

    /// True when all three cells hold `mark`.
    pub fn is_complete(&self, board: &Board, mark: Mark) -> bool {
        self.count(board, mark) == 3
    }

    /// First empty cell in listed order.
    pub fn first_empty(&self, board: &Board) -> Option<Position> {
        self.0.iter().copied().find(|&pos| board.is_empty(pos))
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.numbers();
        write!(f, "{}{}{}", a, b, c)
    }
}

/// Rows, columns and diagonals, in scan order.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine([TopLeft, TopCenter, TopRight]),
    WinningLine([TopRight, MiddleRight, BottomRight]),
    WinningLine([BottomLeft, BottomCenter, BottomRight]),
    WinningLine([TopLeft, MiddleLeft, BottomLeft]),
    WinningLine([TopCenter, Center, BottomCenter]),
    WinningLine([MiddleLeft, Center, MiddleRight]),
    WinningLine([BottomLeft, Center, TopRight]),
    WinningLine([TopLeft, Center, BottomRight]),
];
