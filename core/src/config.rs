use std::path::{Path, PathBuf};

pub const CATALOG_FILE: &str = "foods.csv";
pub const LOG_FILE: &str = "food_log.csv";
pub const GOALS_FILE: &str = "goals.json";

/// Locations of the three data files. Each store is built from one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub catalog: PathBuf,
    pub log: PathBuf,
    pub goals: PathBuf,
}

impl StorePaths {
    /// Standard file names under a single data directory.
    pub fn in_dir(dir: &Path) -> Self {
        StorePaths {
            catalog: dir.join(CATALOG_FILE),
            log: dir.join(LOG_FILE),
            goals: dir.join(GOALS_FILE),
        }
    }
}
