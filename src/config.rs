//! Game configuration assembled from the command line.

use crate::games::tictactoe::HeuristicMode;
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use std::path::PathBuf;
use std::time::Duration;
use tracing::instrument;

/// Default stats file, relative to the working directory.
pub const DEFAULT_STATS_PATH: &str = "stats.json";

/// Bounds of the computer's simulated thinking pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct ThinkDelay {
    min: Duration,
    max: Duration,
}

impl ThinkDelay {
    /// Creates a delay range; the bounds are swapped if given backwards.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Creates a delay range from milliseconds.
    pub fn from_millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    /// No pause at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Uniform draw between the bounds.
    #[instrument(skip(rng))]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

impl Default for ThinkDelay {
    fn default() -> Self {
        Self::from_millis(500, 2000)
    }
}

/// Everything one game needs besides its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct GameConfig {
    /// Path of the JSON stats file.
    stats_path: PathBuf,
    /// Seed for a reproducible game; entropy when absent.
    seed: Option<u64>,
    /// Computer's thinking pause.
    think_delay: ThinkDelay,
    /// Tier-one ordering for the heuristic.
    mode: HeuristicMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
            seed: None,
            think_delay: ThinkDelay::default(),
            mode: HeuristicMode::default(),
        }
    }
}
