use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::GoalsRecord;

/// Single JSON record holding the optional daily goals.
#[derive(Debug, Clone)]
pub struct GoalsStore {
    path: PathBuf,
}

impl GoalsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GoalsStore { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an all-unset record if the file does not exist yet.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.save(&GoalsRecord::default())?;
        debug!(path = %self.path.display(), "created goals file");
        Ok(())
    }

    pub fn load(&self) -> Result<GoalsRecord> {
        let raw = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let goals: GoalsRecord = serde_json::from_str(&raw).map_err(|e| {
            let line = u64::try_from(e.line()).ok().filter(|l| *l > 0);
            Error::corruption(&self.path, line, e.to_string())
        })?;
        goals
            .validate()
            .map_err(|e| Error::corruption(&self.path, None, e.to_string()))?;
        Ok(goals)
    }

    /// Replace the whole record. The new contents go to a temp file that is
    /// synced and renamed over the old one, so readers see old or new, never half.
    pub fn save(&self, goals: &GoalsRecord) -> Result<()> {
        goals.validate()?;
        let json = serde_json::to_string(goals)
            .map_err(|e| Error::io(&self.path, io::Error::other(e)))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| Error::io(&temp_path, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| Error::io(&temp_path, e))?;
        file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| Error::io(&self.path, e))?;
        debug!(calories = ?goals.calories, protein = ?goals.protein, "saved goals");
        Ok(())
    }
}
