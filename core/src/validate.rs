//! Pure parsing of user input. Nothing here loops or touches I/O; the shell
//! decides whether to re-prompt or abort on an `Error::Validation`.

use chrono::NaiveDate;

use crate::error::{Error, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a number, optionally enforcing a lower bound (inclusive).
pub fn parse_number(input: &str, min: Option<f64>) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| Error::Validation("Please enter a valid number.".to_string()))?;
    if !value.is_finite() {
        return Err(Error::Validation("Please enter a valid number.".to_string()));
    }
    if let Some(min) = min {
        if value < min {
            return Err(Error::Validation(format!("Enter a number >= {min}.")));
        }
    }
    Ok(value)
}

/// Like [`parse_number`] but blank input means "no value".
pub fn parse_optional_number(input: &str, min: Option<f64>) -> Result<Option<f64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_number(input, min).map(Some)
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| Error::Validation(format!("Invalid date '{s}'. Use YYYY-MM-DD.")))
}

/// Turn a 1-based selection into an index into a list of `count` items.
/// Out of range is a lookup failure, not a validation failure.
pub fn select_index(choice: f64, count: usize) -> Result<usize> {
    #[allow(clippy::cast_sign_loss)]
    let n = choice.trunc() as usize;
    if choice < 1.0 || n == 0 || n > count {
        return Err(Error::Lookup("Invalid choice.".to_string()));
    }
    Ok(n - 1)
}

/// Title-case a meal label: first letter of every word upper, the rest lower.
/// Blank input becomes "Meal".
#[must_use]
pub fn meal_label(input: &str) -> String {
    let s = input.trim();
    if s.is_empty() {
        return "Meal".to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Unit labels are stored lower-case; blank means grams.
#[must_use]
pub fn unit_label(input: &str) -> String {
    let s = input.trim();
    if s.is_empty() {
        "g".to_string()
    } else {
        s.to_lowercase()
    }
}

pub fn food_name(input: &str) -> Result<String> {
    let s = input.trim();
    if s.is_empty() {
        return Err(Error::Validation("Name cannot be empty.".to_string()));
    }
    Ok(s.to_string())
}
