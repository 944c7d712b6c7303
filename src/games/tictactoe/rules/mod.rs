//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Winning lines are fixed
//! constants; nothing here depends on which lines the computer recognizes.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, outcome};
pub use lines::{WINNING_LINES, WinningLine};
pub use win::winner;
