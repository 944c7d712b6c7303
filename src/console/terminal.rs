//! Console backed by stdin/stdout.

use super::Console;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, instrument};

/// Real terminal: crossterm for clearing, std streams for lines.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    /// Creates a console on the process's stdin and stdout.
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Input closed",
            ));
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        debug!(line = %line, "Read input line");
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    #[instrument(skip(self))]
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
