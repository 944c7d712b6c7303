//! Move parsing and move errors.
//!
//! A player's typed line becomes a [`Position`] only after it parses as an
//! integer and names an empty cell 1-9. A full board admits no move at all.

use super::{Board, Position};
use tracing::{debug, instrument};

/// Error that can occur when choosing or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The input was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// The number does not name a cell 1-9.
    #[display("Cell {} is outside 1-9", _0)]
    OutOfRange(i64),

    /// The square at the position is already occupied.
    #[display("Cell {} is already occupied", _0.number())]
    CellOccupied(Position),

    /// No empty cell is left for the computer to pick.
    #[display("Board is full")]
    BoardFull,
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// True for the errors a human can recover from by typing again.
    pub fn is_invalid_move(&self) -> bool {
        !matches!(self, MoveError::BoardFull)
    }
}

/// Parses a line typed by the player into a legal position on `board`.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`MoveError::BoardFull`] when no cell is empty, otherwise
/// [`MoveError::NotANumber`], [`MoveError::OutOfRange`] or
/// [`MoveError::CellOccupied`].
#[instrument(skip(board))]
pub fn parse_move(input: &str, board: &Board) -> Result<Position, MoveError> {
    if board.is_full() {
        return Err(MoveError::BoardFull);
    }
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| MoveError::NotANumber(trimmed.to_string()))?;
    let pos = Position::from_number(number).ok_or(MoveError::OutOfRange(number))?;
    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }
    debug!(cell = number, "Parsed player move");
    Ok(pos)
}
