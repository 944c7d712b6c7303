//! Persisted stats record.
//!
//! Counters are signed so that any integer a hand-edited file holds is
//! accepted, and they saturate rather than overflow.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

/// The player's run of consecutive wins.
///
/// Keys other than `current` and `longest` are kept and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters, new)]
pub struct WinStreak {
    current: i64,
    longest: i64,
    #[serde(flatten)]
    #[new(default)]
    extra: Map<String, Value>,
}

/// Contents of the stats file.
///
/// Keys other than `games` and `win_streak` are kept and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct Stats {
    games: i64,
    win_streak: WinStreak,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Stats {
    /// Creates a stats record with no extra keys.
    #[instrument]
    pub fn new(games: i64, win_streak: WinStreak) -> Self {
        Self {
            games,
            win_streak,
            extra: Map::new(),
        }
    }

    /// Adds one to the number of games played.
    #[instrument(skip(self), fields(games = self.games))]
    pub fn record_game(&mut self) {
        self.games = self.games.saturating_add(1);
    }

    /// Extends the current streak, raising the longest if it is passed.
    #[instrument(skip(self), fields(current = self.win_streak.current))]
    pub fn record_win(&mut self) {
        let streak = &mut self.win_streak;
        streak.current = streak.current.saturating_add(1);
        if streak.current > streak.longest {
            streak.longest = streak.current;
        }
    }

    /// Ends the current streak; the longest is kept.
    #[instrument(skip(self), fields(current = self.win_streak.current))]
    pub fn reset_streak(&mut self) {
        self.win_streak.current = 0;
    }
}
