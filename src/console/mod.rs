//! Console seam between the game loop and the terminal.

mod terminal;

pub use terminal::TerminalConsole;

use std::io;
use std::time::Duration;

/// Line-oriented terminal access used by the game loop.
pub trait Console {
    /// Blocks for one line of input, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an [`io::ErrorKind::UnexpectedEof`] error once input is closed.
    fn read_line(&mut self) -> io::Result<String>;

    /// Prints one line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Clears the screen and homes the cursor.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Blocks the caller; used for the computer's thinking pause.
    fn pause(&mut self, duration: Duration);
}
