//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use tracing::instrument;

/// Side that owns a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The human player (moves first).
    Player,
    /// The heuristic computer opponent.
    Computer,
}

impl Mark {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// Symbol drawn on the board for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'x',
            Mark::Computer => 'o',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Symbol drawn on the board; a single space when empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares only ever go from `Empty` to `Occupied`; [`Board::place`] refuses
/// to overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (cells 1-9).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Places a mark by cell number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for numbers outside 1-9 and
    /// [`MoveError::CellOccupied`] for a taken cell.
    #[instrument(skip(self))]
    pub fn place_number(&mut self, cell: i64, mark: Mark) -> Result<Position, MoveError> {
        let pos = Position::from_number(cell).ok_or(MoveError::OutOfRange(cell))?;
        self.place(pos, mark)?;
        Ok(pos)
    }

    /// Returns true iff no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Positions that are still empty, in cell order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Formats the board as three `|`-separated rows.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                result.push(self.squares[row * 3 + col].symbol());
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push('\n');
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Result of evaluating the board after a half-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Nobody has won and empty squares remain.
    InProgress,
    /// The human completed a line.
    PlayerWin,
    /// The computer completed a line.
    ComputerWin,
    /// Full board, no line.
    Draw,
}

impl GameOutcome {
    /// True for every outcome except `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Outcome message shown at the end of a game.
    pub fn message(self) -> Option<&'static str> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::PlayerWin => Some("The player wins!"),
            GameOutcome::ComputerWin => Some("The AI wins."),
            GameOutcome::Draw => Some("Draw!"),
        }
    }
}
