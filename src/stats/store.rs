//! Stats persistence.
//!
//! Every counter update is a full round trip: load the whole record, change
//! it, write the whole record back. Nothing is cached between operations.

use super::{Stats, StatsError, StatsErrorKind};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Load/save access to the persisted stats record.
pub trait StatsStore {
    /// Reads the full record.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the record is missing or unreadable.
    fn load_stats(&self) -> Result<Stats, StatsError>;

    /// Replaces the full record.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the record cannot be written.
    fn save_stats(&mut self, stats: &Stats) -> Result<(), StatsError>;

    /// Adds one to `games`. Returns the saved record.
    fn games_increment(&mut self) -> Result<Stats, StatsError> {
        self.update(Stats::record_game)
    }

    /// Adds one to the current streak, raising the longest if passed.
    fn win_streak_increment(&mut self) -> Result<Stats, StatsError> {
        self.update(Stats::record_win)
    }

    /// Sets the current streak to zero.
    fn win_streak_reset(&mut self) -> Result<Stats, StatsError> {
        self.update(Stats::reset_streak)
    }

    /// Loads, applies `change`, saves.
    fn update(&mut self, change: fn(&mut Stats)) -> Result<Stats, StatsError> {
        let mut stats = self.load_stats()?;
        change(&mut stats);
        self.save_stats(&stats)?;
        Ok(stats)
    }
}

/// Stats kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonStatsStore {
    path: PathBuf,
}

impl JsonStatsStore {
    /// Creates a store backed by the file at `path`. The file is not touched.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating JsonStatsStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a zeroed record, refusing to replace an existing file unless
    /// `force` is set.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the file exists without `force`, or on I/O
    /// failure.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn init(&mut self, force: bool) -> Result<Stats, StatsError> {
        if self.path.exists() && !force {
            return Err(StatsError::new(
                &self.path,
                StatsErrorKind::AlreadyExists,
                "refusing to replace it",
            ));
        }
        let stats = Stats::default();
        self.save_stats(&stats)?;
        info!("Stats file initialized");
        Ok(stats)
    }
}

impl StatsStore for JsonStatsStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_stats(&self) -> Result<Stats, StatsError> {
        let file = File::open(&self.path)
            .map_err(|e| StatsError::new(&self.path, StatsErrorKind::Open, e))?;
        let stats: Stats = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StatsError::new(&self.path, StatsErrorKind::Parse, e))?;
        debug!(games = stats.games(), "Stats loaded");
        Ok(stats)
    }

    #[instrument(skip(self, stats), fields(path = %self.path.display()))]
    fn save_stats(&mut self, stats: &Stats) -> Result<(), StatsError> {
        let write_err = |e: &dyn std::fmt::Display| {
            StatsError::new(&self.path, StatsErrorKind::Write, e)
        };
        let file = File::create(&self.path).map_err(|e| write_err(&e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, stats).map_err(|e| write_err(&e))?;
        writer.flush().map_err(|e| write_err(&e))?;
        debug!(games = stats.games(), "Stats saved");
        Ok(())
    }
}

/// Stats held in memory, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatsStore {
    stats: Stats,
    saves: usize,
}

impl InMemoryStatsStore {
    /// Creates a store holding `stats`.
    pub fn new(stats: Stats) -> Self {
        Self { stats, saves: 0 }
    }

    /// Current record.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Number of times the record has been saved.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StatsStore for InMemoryStatsStore {
    fn load_stats(&self) -> Result<Stats, StatsError> {
        Ok(self.stats.clone())
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StatsError> {
        self.stats = stats.clone();
        self.saves += 1;
        Ok(())
    }
}
