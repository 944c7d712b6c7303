//! Tic-tac-toe: board, rules and the computer's heuristic.

mod action;
pub mod heuristic;
mod position;
mod recognized;
pub mod rules;
mod types;

pub use action::{MoveError, parse_move};
pub use heuristic::{ComputerMove, HeuristicMode, Tier, choose_move};
pub use position::Position;
pub use recognized::{RECOGNIZED_LINE_COUNT, RecognizedLines};
pub use rules::{WINNING_LINES, WinningLine, is_draw, outcome, winner};
pub use types::{Board, GameOutcome, Mark, Square};
