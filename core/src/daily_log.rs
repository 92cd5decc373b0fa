use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::csv_file;
use crate::error::Result;
use crate::models::LogEntry;

pub const LOG_HEADER: &[&str] = &[
    "date", "meal", "name", "amount", "unit", "kcal", "protein", "carbs", "fat",
];

/// Append-only meal log shared across all dates.
#[derive(Debug, Clone)]
pub struct DailyLogStore {
    path: PathBuf,
}

impl DailyLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DailyLogStore { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a header-only log if none exists.
    pub fn ensure_initialized(&self) -> Result<()> {
        if csv_file::create::<LogEntry>(&self.path, LOG_HEADER, &[])? {
            debug!(path = %self.path.display(), "created meal log");
        }
        Ok(())
    }

    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        entry.validate()?;
        csv_file::append(&self.path, entry)?;
        debug!(date = %entry.date, name = %entry.name, "appended log entry");
        Ok(())
    }

    /// Entries for `date` in the order they were logged. The whole file is
    /// parsed, so a corrupt row on any date is reported.
    pub fn read_by_date(&self, date: NaiveDate) -> Result<Vec<LogEntry>> {
        let all = csv_file::read_all(&self.path, LOG_HEADER, LogEntry::validate)?;
        let entries: Vec<LogEntry> = all.into_iter().filter(|e| e.date == date).collect();
        debug!(%date, count = entries.len(), "read log entries");
        Ok(entries)
    }
}
