use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A catalog food. Nutrient fields describe `qty_per_unit` of `unit`
/// (e.g. 100 g, 200 ml, 1 serving).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub unit: String,
    pub qty_per_unit: f64,
    pub kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodRecord {
    /// Check the record invariants: a positive finite reference quantity and
    /// non-negative finite nutrients.
    pub fn validate(&self) -> Result<()> {
        if !self.qty_per_unit.is_finite() || self.qty_per_unit <= 0.0 {
            return Err(Error::Validation(format!(
                "Quantity per unit must be greater than 0 (got {})",
                self.qty_per_unit
            )));
        }
        for (label, value) in [
            ("kcal", self.kcal),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Validation(format!(
                    "{label} must be a non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

/// One logged portion. Nutrients are copied and pre-scaled when the entry is
/// written, so later catalog changes never touch past entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub meal: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl LogEntry {
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::Validation(format!(
                "Amount must be greater than 0 (got {})",
                self.amount
            )));
        }
        for (label, value) in [
            ("kcal", self.kcal),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if !value.is_finite() {
                return Err(Error::Validation(format!("{label} is not a number")));
            }
        }
        Ok(())
    }
}

/// Optional daily targets. `None` means no target is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalsRecord {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
}

impl GoalsRecord {
    #[must_use]
    pub fn any_set(&self) -> bool {
        self.calories.is_some() || self.protein.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        for (label, value) in [("calories", self.calories), ("protein", self.protein)] {
            match value {
                Some(v) if !v.is_finite() || v < 0.0 => {
                    return Err(Error::Validation(format!(
                        "{label} goal must be a non-negative number (got {v})"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Scaled nutrients for one portion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Macros {
    pub kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Summed nutrients for a day.
pub type Totals = Macros;

/// Goal minus total for each goal. `None` when that goal is unset; a negative
/// value means the goal was exceeded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Remaining {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct DayReport {
    pub date: NaiveDate,
    pub entries: Vec<LogEntry>,
    pub totals: Totals,
    pub goals: GoalsRecord,
    pub remaining: Remaining,
}
