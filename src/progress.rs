//! Progress Tracker: per-day correct/attempted counts
//!
//! On disk the record is a JSON object of ISO dates to `[correct, total]`:
//!
//! ```json
//! { "2024-01-01": [4, 7], "2024-01-02": [10, 10] }
//! ```
//!
//! A missing or unreadable file loads as an empty record. Write failures are
//! returned to the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to create progress directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write progress file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts for one day; `total >= correct` always holds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct DayCount {
    pub correct: u32,
    pub total: u32,
}

impl DayCount {
    /// Fraction correct, `None` for a day with no attempts
    pub fn accuracy(&self) -> Option<f32> {
        (self.total > 0).then(|| self.correct as f32 / self.total as f32)
    }
}

impl TryFrom<(u32, u32)> for DayCount {
    type Error = String;

    fn try_from((correct, total): (u32, u32)) -> Result<Self, Self::Error> {
        if correct > total {
            return Err(format!("correct ({correct}) exceeds total ({total})"));
        }
        Ok(DayCount { correct, total })
    }
}

impl From<DayCount> for (u32, u32) {
    fn from(count: DayCount) -> Self {
        (count.correct, count.total)
    }
}

/// One history row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub correct: u32,
    pub total: u32,
}

/// Date -> counts, ordered by date
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    days: BTreeMap<NaiveDate, DayCount>,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a session's counts onto the day's entry
    ///
    /// `correct` is capped at `total` and sums saturate.
    pub fn record_session(&mut self, date: NaiveDate, correct: u32, total: u32) {
        let correct = correct.min(total);
        let day = self.days.entry(date).or_default();
        day.total = day.total.saturating_add(total);
        day.correct = day.correct.saturating_add(correct).min(day.total);
    }

    /// All days, oldest first
    pub fn get_history(&self) -> Vec<DayEntry> {
        self.days
            .iter()
            .map(|(&date, count)| DayEntry {
                date,
                correct: count.correct,
                total: count.total,
            })
            .collect()
    }

    /// Counts for a date (zero if nothing recorded)
    pub fn day(&self, date: NaiveDate) -> DayCount {
        self.days.get(&date).copied().unwrap_or_default()
    }

    /// Sums across every recorded day
    pub fn all_time(&self) -> DayCount {
        self.days.values().fold(DayCount::default(), |acc, day| DayCount {
            correct: acc.correct.saturating_add(day.correct),
            total: acc.total.saturating_add(day.total),
        })
    }

    /// No day recorded yet
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Read the record; missing or corrupt files yield an empty record
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no progress file, starting fresh");
                return Self::new();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable progress file ignored");
                return Self::new();
            }
        };

        match serde_json::from_str::<ProgressRecord>(&content) {
            Ok(record) => {
                tracing::debug!(path = %path.display(), days = record.days.len(), "progress loaded");
                record
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt progress file ignored");
                Self::new()
            }
        }
    }

    /// Write the record, creating the parent directory if needed
    ///
    /// The document goes to a sibling temp file first and is renamed over the
    /// target, so a failed write leaves the previous file intact.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PersistenceError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        let write_err = |source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, path).map_err(write_err)?;

        tracing::debug!(path = %path.display(), days = self.days.len(), "progress saved");
        Ok(())
    }
}
