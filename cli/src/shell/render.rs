use std::io::{self, Write};

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use calorie_core::models::{DayReport, FoodRecord};
use calorie_core::nutrition::round1;

/// Rows shown by the food search.
pub(crate) const SEARCH_LIMIT: usize = 50;

pub(crate) fn print_day(out: &mut impl Write, report: &DayReport) -> io::Result<()> {
    #[derive(Tabled)]
    struct DayRow {
        #[tabled(rename = "Meal")]
        meal: String,
        #[tabled(rename = "Food")]
        food: String,
        #[tabled(rename = "Amount")]
        amount: String,
        #[tabled(rename = "Unit")]
        unit: String,
        #[tabled(rename = "Kcal")]
        kcal: String,
        #[tabled(rename = "Prot")]
        protein: String,
        #[tabled(rename = "Carb")]
        carbs: String,
    }

    writeln!(out, "\n===== {} =====", report.date)?;
    if report.entries.is_empty() {
        writeln!(out, "No entries yet.\n")?;
        return Ok(());
    }

    let rows: Vec<DayRow> = report
        .entries
        .iter()
        .map(|e| DayRow {
            meal: fixed(&e.meal, 10),
            food: fixed(&e.name, 22),
            amount: format!("{:>10.0}", e.amount),
            unit: fixed(&e.unit, 6),
            kcal: format!("{:>8.0}", no_neg_zero(e.kcal)),
            protein: format!("{:>8.1}", no_neg_zero(e.protein)),
            carbs: format!("{:>8.1}", no_neg_zero(e.carbs)),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(4..7)).with(Alignment::right()))
        .to_string();
    writeln!(out, "{table}")?;

    let t = &report.totals;
    writeln!(
        out,
        "Totals: {} kcal  |  Protein {:.1} g  |  Carbs {:.1} g  |  Fat {:.1} g",
        whole(t.kcal),
        no_neg_zero(t.protein),
        no_neg_zero(t.carbs),
        no_neg_zero(t.fat)
    )?;

    if report.goals.any_set() {
        let mut parts = Vec::new();
        if let (Some(goal), Some(rem)) = (report.goals.calories, report.remaining.calories) {
            parts.push(format!("{} kcal (remaining {})", whole(goal), whole(rem)));
        }
        if let (Some(goal), Some(rem)) = (report.goals.protein, report.remaining.protein) {
            parts.push(format!(
                "Protein {} g (remaining {} g)",
                num(goal),
                num(round1(rem))
            ));
        }
        writeln!(out, "Goals: {}", parts.join("  |  "))?;
    }
    writeln!(out)
}

/// Numbered list used when picking a food to log.
pub(crate) fn print_matches(out: &mut impl Write, foods: &[FoodRecord]) -> io::Result<()> {
    writeln!(out, "\nSelect a food:")?;
    for (i, f) in foods.iter().enumerate() {
        writeln!(
            out,
            "{}. {}  ({}{} -> {} kcal)",
            i + 1,
            f.name,
            num(f.qty_per_unit),
            f.unit,
            num(f.kcal)
        )?;
    }
    Ok(())
}

pub(crate) fn print_food_table(out: &mut impl Write, foods: &[FoodRecord]) -> io::Result<()> {
    #[derive(Tabled)]
    struct FoodRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Unit")]
        unit: String,
        #[tabled(rename = "Qty/Unit")]
        qty: String,
        #[tabled(rename = "Kcal")]
        kcal: String,
        #[tabled(rename = "Prot")]
        protein: String,
        #[tabled(rename = "Carb")]
        carbs: String,
        #[tabled(rename = "Fat")]
        fat: String,
    }

    let rows: Vec<FoodRow> = foods
        .iter()
        .take(SEARCH_LIMIT)
        .map(|f| FoodRow {
            name: fixed(&f.name, 25),
            unit: fixed(&f.unit, 10),
            qty: format!("{:>14}", num(f.qty_per_unit)),
            kcal: format!("{:>6}", whole(f.kcal)),
            protein: format!("{:>6.1}", f.protein),
            carbs: format!("{:>6.1}", f.carbs),
            fat: format!("{:>6.1}", f.fat),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..7)).with(Alignment::right()))
        .to_string();
    writeln!(out, "{table}")?;
    if foods.len() > SEARCH_LIMIT {
        writeln!(
            out,
            "({} more not shown, narrow the search)",
            foods.len() - SEARCH_LIMIT
        )?;
    }
    writeln!(out)
}

/// Cut to at most `width` characters, then pad to exactly `width`.
pub(crate) fn fixed(s: &str, width: usize) -> String {
    let clipped: String = s.chars().take(width).collect();
    format!("{clipped:<width$}")
}

/// Integer part, the way the day totals and goals are shown.
pub(crate) fn whole(v: f64) -> String {
    format!("{:.0}", no_neg_zero(v.trunc()))
}

/// Shortest form: 100 rather than 100.0, 2.5 stays 2.5.
pub(crate) fn num(v: f64) -> String {
    format!("{}", no_neg_zero(v))
}

pub(crate) fn no_neg_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
