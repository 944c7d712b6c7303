//! The two sides of a game.

mod computer;
mod human;

pub use computer::{ComputerPlayer, THINKING};
pub use human::{HumanPlayer, INVALID_MOVE, MOVE_PROMPT};
