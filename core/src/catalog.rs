use std::path::{Path, PathBuf};

use tracing::debug;

use crate::csv_file;
use crate::error::Result;
use crate::models::FoodRecord;
use crate::seed::starter_foods;

pub const CATALOG_HEADER: &[&str] = &[
    "name",
    "unit",
    "qty_per_unit",
    "kcal",
    "protein",
    "carbs",
    "fat",
];

/// The food catalog, one CSV row per food.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogStore { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed a new catalog with the starter foods. An existing catalog is left alone.
    pub fn ensure_initialized(&self) -> Result<()> {
        let foods = starter_foods();
        if csv_file::create(&self.path, CATALOG_HEADER, &foods)? {
            debug!(path = %self.path.display(), count = foods.len(), "seeded food catalog");
        }
        Ok(())
    }

    /// Every food in file order.
    pub fn load_all(&self) -> Result<Vec<FoodRecord>> {
        let foods = csv_file::read_all(&self.path, CATALOG_HEADER, FoodRecord::validate)?;
        debug!(path = %self.path.display(), count = foods.len(), "loaded food catalog");
        Ok(foods)
    }

    /// Add a food to the end of the catalog. Duplicate names are allowed.
    pub fn append(&self, food: &FoodRecord) -> Result<()> {
        food.validate()?;
        csv_file::append(&self.path, food)?;
        debug!(name = %food.name, "appended food to catalog");
        Ok(())
    }
}

/// Case-insensitive substring match on food names, in catalog order.
#[must_use]
pub fn search<'a>(foods: &'a [FoodRecord], query: &str) -> Vec<&'a FoodRecord> {
    let q = query.trim().to_lowercase();
    foods
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&q))
        .collect()
}
