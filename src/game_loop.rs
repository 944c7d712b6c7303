//! Turn sequencing for one game.
//!
//! ```text
//! AwaitingPlayerMove -> AwaitingComputerMove -> AwaitingPlayerMove -> ... -> Terminal(outcome)
//! ```
//!
//! The outcome is evaluated after every half-move. The stats store is told
//! about the game once at start and once more when a side wins; a draw
//! leaves the streak alone.

use crate::GameError;
use crate::console::Console;
use crate::games::tictactoe::{Board, GameOutcome, Mark, outcome};
use crate::players::{ComputerPlayer, HumanPlayer};
use crate::stats::StatsStore;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Shown under the first board.
pub const INSTRUCTIONS: &str = "(Enter a number from 1-9)";

/// Shown before the final blocking read.
pub const PRESS_ENTER: &str = "Press Enter";

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on the human.
    AwaitingPlayerMove,
    /// The computer moves next.
    AwaitingComputerMove,
    /// Finished; never left once entered.
    Terminal(GameOutcome),
}

/// One game between the console's human and a [`ComputerPlayer`].
pub struct GameLoop<'a, R> {
    board: Board,
    phase: Phase,
    human: HumanPlayer,
    computer: ComputerPlayer<R>,
    console: &'a mut dyn Console,
    store: &'a mut dyn StatsStore,
}

impl<'a, R: Rng> GameLoop<'a, R> {
    /// Creates a game on an empty board, player to move.
    pub fn new(
        computer: ComputerPlayer<R>,
        console: &'a mut dyn Console,
        store: &'a mut dyn StatsStore,
    ) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingPlayerMove,
            human: HumanPlayer::new(),
            computer,
            console,
            store,
        }
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human side.
    pub fn human(&self) -> &HumanPlayer {
        &self.human
    }

    /// The computer side.
    pub fn computer(&self) -> &ComputerPlayer<R> {
        &self.computer
    }

    /// Plays a whole game: start, turns until terminal, report.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] on stats, console or heuristic failure.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        self.start()?;
        let outcome = loop {
            if let Phase::Terminal(outcome) = self.step()? {
                break outcome;
            }
        };
        self.finish(outcome)?;
        Ok(outcome)
    }

    /// Counts the game and shows the empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the stats file cannot be updated.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), GameError> {
        let stats = self.store.games_increment()?;
        info!(games = stats.games(), "Game started");
        self.render()?;
        self.console.write_line(INSTRUCTIONS)?;
        Ok(())
    }

    /// Plays one half-move and returns the new phase. A no-op once terminal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] on stats, console or heuristic failure.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn step(&mut self) -> Result<Phase, GameError> {
        match self.phase {
            Phase::AwaitingPlayerMove => {
                let pos = self.human.next_move(&self.board, self.console)?;
                self.board.place(pos, Mark::Player)?;
                self.render()?;
                self.settle(Phase::AwaitingComputerMove)?;
            }
            Phase::AwaitingComputerMove => {
                let chosen = self.computer.next_move(&self.board, self.console)?;
                self.board.place(chosen.position, Mark::Computer)?;
                self.render()?;
                self.settle(Phase::AwaitingPlayerMove)?;
            }
            Phase::Terminal(_) => {}
        }
        Ok(self.phase)
    }

    /// Prints the outcome and waits for Enter.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] on stats or console failure.
    #[instrument(skip(self))]
    pub fn finish(&mut self, outcome: GameOutcome) -> Result<(), GameError> {
        if let Some(message) = outcome.message() {
            self.console.write_line(message)?;
        }
        if outcome == GameOutcome::PlayerWin {
            let stats = self.store.load_stats()?;
            let streak = stats.win_streak();
            self.console.write_line(&format!(
                "You're on a {} win streak! (Longest: {})",
                streak.current(),
                streak.longest()
            ))?;
        }
        self.console.write_line(PRESS_ENTER)?;
        self.console.read_line()?;
        Ok(())
    }

    fn render(&mut self) -> Result<(), GameError> {
        self.console.clear_screen()?;
        self.console.write_line(&self.board.render())?;
        Ok(())
    }

    fn settle(&mut self, next: Phase) -> Result<(), GameError> {
        let outcome = outcome(&self.board);
        if !outcome.is_terminal() {
            self.phase = next;
            return Ok(());
        }

        match outcome {
            GameOutcome::PlayerWin => {
                self.store.win_streak_increment()?;
            }
            GameOutcome::ComputerWin => {
                self.store.win_streak_reset()?;
            }
            GameOutcome::Draw | GameOutcome::InProgress => {}
        }
        info!(?outcome, "Game over");
        debug!(board = %self.board.render(), "Final board");
        self.phase = Phase::Terminal(outcome);
        Ok(())
    }
}
