//! Persisted game counter and win streak.

mod error;
mod models;
mod store;

pub use error::{StatsError, StatsErrorKind};
pub use models::{Stats, WinStreak};
pub use store::{InMemoryStatsStore, JsonStatsStore, StatsStore};
