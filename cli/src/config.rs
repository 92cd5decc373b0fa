use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

use calorie_core::config::StorePaths;

/// Overrides the platform data directory when set to a non-empty path.
pub const DATA_DIR_ENV: &str = "CALORIE_DATA_DIR";

pub struct Config {
    pub data_dir: PathBuf,
    pub paths: StorePaths,
}

impl Config {
    pub fn load() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let proj_dirs = ProjectDirs::from("", "", "calorie")
                    .context("Could not determine home directory")?;
                proj_dirs.data_dir().to_path_buf()
            }
        };
        Self::from_dir(data_dir)
    }

    pub fn from_dir(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let paths = StorePaths::in_dir(&data_dir);
        Ok(Config { data_dir, paths })
    }
}
