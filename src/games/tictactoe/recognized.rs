//! The computer's restricted view of the winning lines.

use super::rules::{WINNING_LINES, WinningLine};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// How many lines the computer recognizes: two fewer than exist.
pub const RECOGNIZED_LINE_COUNT: usize = WINNING_LINES.len() - 2;

/// Winning lines the computer watches for near-completion.
///
/// Sampled with replacement, so a game may repeat a line and miss three or
/// more. Only the heuristic reads this; win detection always uses every
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecognizedLines(Vec<WinningLine>);

impl RecognizedLines {
    /// Wraps an explicit list of lines, scanned in the given order.
    pub fn new(lines: Vec<WinningLine>) -> Self {
        Self(lines)
    }

    /// No recognized lines; tier one of the heuristic never fires.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every winning line in table order.
    pub fn all() -> Self {
        Self(WINNING_LINES.to_vec())
    }

    /// Draws [`RECOGNIZED_LINE_COUNT`] lines uniformly with replacement.
    #[instrument(skip(rng))]
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lines: Vec<WinningLine> = (0..RECOGNIZED_LINE_COUNT)
            .filter_map(|_| WINNING_LINES.choose(rng).copied())
            .collect();
        debug!(
            lines = %lines.iter().map(ToString::to_string).collect::<Vec<_>>().join(","),
            "Sampled recognized lines"
        );
        Self(lines)
    }

    /// Lines in scan order.
    pub fn lines(&self) -> &[WinningLine] {
        &self.0
    }

    /// Number of sampled entries, counting repeats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no line is recognized.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
