//! Failures reading or writing the stats file.

use derive_more::Display;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// What went wrong with the stats file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatsErrorKind {
    /// The file could not be opened for reading.
    #[display("cannot be opened")]
    Open,
    /// The contents are not a stats record.
    #[display("is not a stats record")]
    Parse,
    /// The file could not be written.
    #[display("cannot be written")]
    Write,
    /// `init` found a file already in place.
    #[display("already exists (use --force to overwrite)")]
    AlreadyExists,
}

/// A stats file failure, naming the file and where in this crate it was
/// raised.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Stats file '{}' {}: {} ({}:{})", path.display(), kind, detail, file, line)]
pub struct StatsError {
    /// The stats file involved.
    pub path: PathBuf,
    /// Failure category.
    pub kind: StatsErrorKind,
    /// Underlying cause as text; empty when there is none.
    pub detail: String,
    /// Line that raised the error.
    pub line: u32,
    /// Source file that raised the error.
    pub file: &'static str,
}

impl StatsError {
    /// Creates an error for `path`, recording the caller's location.
    #[track_caller]
    #[instrument(skip(path, detail), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>, kind: StatsErrorKind, detail: impl ToString) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.as_ref().to_path_buf(),
            kind,
            detail: detail.to_string(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
