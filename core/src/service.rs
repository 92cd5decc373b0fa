use chrono::NaiveDate;
use tracing::info;

use crate::catalog::{self, CatalogStore};
use crate::config::StorePaths;
use crate::daily_log::DailyLogStore;
use crate::error::{Error, Result};
use crate::goals::GoalsStore;
use crate::models::{DayReport, FoodRecord, GoalsRecord, LogEntry};
use crate::nutrition;

/// Front door for everything the shell does: owns the three stores and runs
/// the nutrition math between them.
pub struct Tracker {
    catalog: CatalogStore,
    log: DailyLogStore,
    goals: GoalsStore,
}

impl Tracker {
    /// Build the stores from `paths` and create any missing data files.
    pub fn open(paths: &StorePaths) -> Result<Self> {
        let tracker = Tracker {
            catalog: CatalogStore::new(&paths.catalog),
            log: DailyLogStore::new(&paths.log),
            goals: GoalsStore::new(&paths.goals),
        };
        tracker.catalog.ensure_initialized()?;
        tracker.log.ensure_initialized()?;
        tracker.goals.ensure_initialized()?;
        Ok(tracker)
    }

    // --- Catalog ---

    /// Reload the catalog and return foods whose name contains `query`.
    pub fn search_foods(&self, query: &str) -> Result<Vec<FoodRecord>> {
        let foods = self.catalog.load_all()?;
        Ok(catalog::search(&foods, query)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn add_food(&self, food: &FoodRecord) -> Result<()> {
        self.catalog.append(food)?;
        info!(name = %food.name, unit = %food.unit, "added custom food");
        Ok(())
    }

    // --- Log ---

    /// Scale `food` to `amount`, append the entry for `date` and return it.
    pub fn log_meal(
        &self,
        date: NaiveDate,
        meal: &str,
        food: &FoodRecord,
        amount: f64,
    ) -> Result<LogEntry> {
        food.validate()?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::Validation(
                "Amount must be greater than 0".to_string(),
            ));
        }

        let macros = nutrition::scale(food, amount);
        if ![macros.kcal, macros.protein, macros.carbs, macros.fat]
            .into_iter()
            .all(f64::is_finite)
        {
            return Err(Error::Validation("Amount too large".to_string()));
        }
        let entry = LogEntry {
            date,
            meal: meal.to_string(),
            name: food.name.clone(),
            amount,
            unit: food.unit.clone(),
            kcal: macros.kcal,
            protein: macros.protein,
            carbs: macros.carbs,
            fat: macros.fat,
        };
        self.log.append(&entry)?;
        info!(%date, meal, name = %entry.name, kcal = entry.kcal, "logged meal");
        Ok(entry)
    }

    /// Entries, totals and goal deltas for one day.
    pub fn day_report(&self, date: NaiveDate) -> Result<DayReport> {
        let entries = self.log.read_by_date(date)?;
        let totals = nutrition::aggregate(&entries);
        let goals = self.goals.load()?;
        let remaining = nutrition::remaining(&goals, &totals);
        Ok(DayReport {
            date,
            entries,
            totals,
            goals,
            remaining,
        })
    }

    // --- Goals ---

    pub fn set_goals(&self, goals: &GoalsRecord) -> Result<()> {
        self.goals.save(goals)?;
        info!(calories = ?goals.calories, protein = ?goals.protein, "updated goals");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Totals;

    fn tracker() -> (tempfile::TempDir, Tracker) {
        let dir = tempfile::tempdir().unwrap();
        let tracker = Tracker::open(&StorePaths::in_dir(dir.path())).unwrap();
        (dir, tracker)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn food_named(tracker: &Tracker, name: &str) -> FoodRecord {
        tracker
            .search_foods(name)
            .unwrap()
            .into_iter()
            .find(|f| f.name == name)
            .unwrap()
    }

    #[test]
    fn test_open_creates_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StorePaths::in_dir(dir.path());
        let tracker = Tracker::open(&paths).unwrap();
        assert!(paths.catalog.exists());
        assert!(paths.log.exists());
        assert!(paths.goals.exists());
        assert_eq!(tracker.search_foods("").unwrap().len(), 15);
        assert_eq!(tracker.day_report(day()).unwrap().goals, GoalsRecord::default());
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StorePaths::in_dir(dir.path());
        {
            let tracker = Tracker::open(&paths).unwrap();
            let rice = food_named(&tracker, "Boiled Rice");
            tracker.log_meal(day(), "Lunch", &rice, 150.0).unwrap();
        }
        let tracker = Tracker::open(&paths).unwrap();
        assert_eq!(tracker.day_report(day()).unwrap().entries.len(), 1);
    }

    #[test]
    fn test_log_rice_150g() {
        let (_dir, tracker) = tracker();
        let rice = food_named(&tracker, "Boiled Rice");
        let entry = tracker.log_meal(day(), "Lunch", &rice, 150.0).unwrap();

        assert_eq!(entry.name, "Boiled Rice");
        assert_eq!(entry.unit, "g");
        assert!((entry.kcal - 195.0).abs() < 1e-9);
        assert!((entry.protein - 4.1).abs() < 1e-9);
        assert_eq!(tracker.day_report(day()).unwrap().entries, vec![entry]);
    }

    #[test]
    fn test_log_rejects_zero_amount() {
        let (_dir, tracker) = tracker();
        let rice = food_named(&tracker, "Boiled Rice");
        assert!(matches!(
            tracker.log_meal(day(), "Lunch", &rice, 0.0),
            Err(Error::Validation(_))
        ));
        assert!(tracker.day_report(day()).unwrap().entries.is_empty());
    }

    #[test]
    fn test_log_rejects_overflowing_amount() {
        let (_dir, tracker) = tracker();
        let egg = food_named(&tracker, "Egg (1 large)");
        let err = tracker.log_meal(day(), "Breakfast", &egg, f64::MAX).unwrap_err();
        assert!(matches!(&err, Error::Validation(msg) if msg == "Amount too large"));
        assert!(tracker.day_report(day()).unwrap().entries.is_empty());
    }

    #[test]
    fn test_entries_snapshot_nutrients() {
        let (_dir, tracker) = tracker();
        let oats = FoodRecord {
            name: "Oats".to_string(),
            unit: "g".to_string(),
            qty_per_unit: 40.0,
            kcal: 150.0,
            protein: 5.0,
            carbs: 27.0,
            fat: 3.0,
        };
        tracker.add_food(&oats).unwrap();
        tracker.log_meal(day(), "Breakfast", &oats, 80.0).unwrap();

        // a later food with the same name does not touch the logged entry
        let mut richer = oats.clone();
        richer.kcal = 400.0;
        tracker.add_food(&richer).unwrap();

        let entries = tracker.day_report(day()).unwrap().entries;
        assert!((entries[0].kcal - 300.0).abs() < 1e-9);
        assert_eq!(tracker.search_foods("oats").unwrap().len(), 2);
    }

    #[test]
    fn test_day_report_with_goals() {
        let (_dir, tracker) = tracker();
        tracker
            .set_goals(&GoalsRecord {
                calories: Some(2000.0),
                protein: None,
            })
            .unwrap();
        let paratha = food_named(&tracker, "Aloo Paratha");
        let rice = food_named(&tracker, "Boiled Rice");
        tracker.log_meal(day(), "Breakfast", &paratha, 2.0).unwrap();
        tracker.log_meal(day(), "Lunch", &rice, 200.0).unwrap();

        let report = tracker.day_report(day()).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert!((report.totals.kcal - 900.0).abs() < 1e-9);
        assert_eq!(report.remaining.calories, Some(1100.0));
        assert_eq!(report.remaining.protein, None);
    }

    #[test]
    fn test_day_report_empty_day() {
        let (_dir, tracker) = tracker();
        let report = tracker.day_report(day()).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.totals, Totals::default());
    }

    #[test]
    fn test_search_sees_new_foods() {
        let (_dir, tracker) = tracker();
        assert!(tracker.search_foods("quinoa").unwrap().is_empty());
        tracker
            .add_food(&FoodRecord {
                name: "Quinoa (Cooked)".to_string(),
                unit: "g".to_string(),
                qty_per_unit: 100.0,
                kcal: 120.0,
                protein: 4.4,
                carbs: 21.3,
                fat: 1.9,
            })
            .unwrap();
        assert_eq!(tracker.search_foods("QUIN").unwrap().len(), 1);
    }
}
