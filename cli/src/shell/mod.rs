//! The interactive menu loop.
//!
//! Every action is one request/response cycle: collect input, validate,
//! call the [`Tracker`], print, and fall back to the main menu. Validation and
//! lookup failures are printed and the loop carries on; anything else ends the
//! session with an error.

mod render;

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use calorie_core::Error;
use calorie_core::models::{FoodRecord, GoalsRecord};
use calorie_core::service::Tracker;
use calorie_core::validate;

use render::{num, print_day, print_food_table, print_matches};

/// Smallest accepted reference quantity or consumed amount.
const MIN_AMOUNT: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayChoice {
    Today,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    MainMenu,
    LoggingMeal,
    ShowingDay(DayChoice),
    AddingFood,
    SettingGoals,
    SearchingCatalog,
    Exited,
}

impl ShellState {
    /// Map a main-menu selection to the next state.
    pub fn from_menu(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(ShellState::LoggingMeal),
            "2" => Some(ShellState::ShowingDay(DayChoice::Today)),
            "3" => Some(ShellState::ShowingDay(DayChoice::Other)),
            "4" => Some(ShellState::AddingFood),
            "5" => Some(ShellState::SettingGoals),
            "6" => Some(ShellState::SearchingCatalog),
            "7" => Some(ShellState::Exited),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    tracker: Tracker,
    input: R,
    out: W,
    today: Box<dyn Fn() -> NaiveDate>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(tracker: Tracker, input: R, out: W) -> Self {
        Shell {
            tracker,
            input,
            out,
            today: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the source of "today" used for logging and the default day view.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    /// Run until the user picks Exit.
    pub fn run(&mut self) -> Result<()> {
        let mut state = ShellState::MainMenu;
        while state != ShellState::Exited {
            state = self.step(state)?;
        }
        Ok(())
    }

    fn step(&mut self, state: ShellState) -> Result<ShellState> {
        debug!(?state, "shell step");
        let outcome = match state {
            ShellState::MainMenu => return self.main_menu(),
            ShellState::Exited => return Ok(ShellState::Exited),
            ShellState::LoggingMeal => self.log_meal(),
            ShellState::ShowingDay(choice) => self.show_day(choice),
            ShellState::AddingFood => self.add_food(),
            ShellState::SettingGoals => self.set_goals(),
            ShellState::SearchingCatalog => self.search_catalog(),
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.downcast_ref::<Error>().is_some_and(Error::is_recoverable) => {
                warn!(?state, error = %e, "action aborted");
                writeln!(self.out, "{e}\n")?;
            }
            Err(e) => return Err(e),
        }
        Ok(ShellState::MainMenu)
    }

    fn main_menu(&mut self) -> Result<ShellState> {
        writeln!(self.out, "=== Calorie Counter ===")?;
        writeln!(self.out, "1) Log a meal")?;
        writeln!(self.out, "2) Show today")?;
        writeln!(self.out, "3) Show another day")?;
        writeln!(self.out, "4) Add custom food")?;
        writeln!(self.out, "5) Set daily goals")?;
        writeln!(self.out, "6) List foods (search)")?;
        writeln!(self.out, "7) Exit")?;
        let choice = self.prompt("Choose: ")?;

        match ShellState::from_menu(&choice) {
            Some(ShellState::Exited) => {
                writeln!(self.out, "Bye!")?;
                Ok(ShellState::Exited)
            }
            Some(next) => Ok(next),
            None => {
                writeln!(self.out, "Invalid option.\n")?;
                Ok(ShellState::MainMenu)
            }
        }
    }

    fn log_meal(&mut self) -> Result<()> {
        writeln!(self.out, "\nLog a meal:")?;
        let meal = validate::meal_label(&self.prompt("Meal (Breakfast/Lunch/Snack/Dinner): ")?);
        let query = self.prompt("Search food name: ")?;

        let matches = self.tracker.search_foods(&query)?;
        if matches.is_empty() {
            return Err(Error::Lookup(
                "No matches. Tip: add it as a custom food from main menu.".to_string(),
            )
            .into());
        }

        print_matches(&mut self.out, &matches)?;
        let choice = self.prompt_number("Choice #: ", Some(1.0))?;
        let idx = validate::select_index(choice, matches.len())?;
        let food = &matches[idx];

        let amount = self.prompt_number(
            &format!("How much did you eat (in {})? ", food.unit),
            Some(MIN_AMOUNT),
        )?;

        let date = (self.today)();
        let entry = self.tracker.log_meal(date, &meal, food, amount)?;
        writeln!(
            self.out,
            "Logged: {} | {} | {}{} | {} kcal (P{}/C{}/F{})\n",
            entry.meal,
            entry.name,
            num(entry.amount),
            entry.unit,
            num(entry.kcal),
            num(entry.protein),
            num(entry.carbs),
            num(entry.fat)
        )?;
        Ok(())
    }

    fn show_day(&mut self, choice: DayChoice) -> Result<()> {
        let date = match choice {
            DayChoice::Today => (self.today)(),
            DayChoice::Other => {
                let input = self.prompt("Enter date (YYYY-MM-DD): ")?;
                validate::parse_date(&input)?
            }
        };
        let report = self.tracker.day_report(date)?;
        print_day(&mut self.out, &report)?;
        Ok(())
    }

    fn add_food(&mut self) -> Result<()> {
        writeln!(self.out, "\nAdd a custom food:")?;
        let name = loop {
            let input = self.prompt("Name: ")?;
            match validate::food_name(&input) {
                Ok(name) => break name,
                Err(e) => writeln!(self.out, "{e}")?,
            }
        };
        let unit = validate::unit_label(&self.prompt("Unit (g/ml/serving): ")?);
        let qty_per_unit = self.prompt_number(
            "Quantity per unit (e.g., 100 for per 100g, 1 for per serving): ",
            Some(MIN_AMOUNT),
        )?;
        let kcal = self.prompt_number("Calories for that unit: ", Some(0.0))?;
        let protein = self.prompt_number("Protein (g): ", Some(0.0))?;
        let carbs = self.prompt_number("Carbs (g): ", Some(0.0))?;
        let fat = self.prompt_number("Fat (g): ", Some(0.0))?;

        let food = FoodRecord {
            name,
            unit,
            qty_per_unit,
            kcal,
            protein,
            carbs,
            fat,
        };
        self.tracker.add_food(&food)?;
        writeln!(self.out, "Saved '{}' to foods.\n", food.name)?;
        Ok(())
    }

    fn set_goals(&mut self) -> Result<()> {
        writeln!(self.out, "\nSet daily goals (leave blank to skip):")?;
        let calories = self.prompt_optional_number("Calories goal (kcal): ")?;
        let protein = self.prompt_optional_number("Protein goal (g): ")?;

        self.tracker
            .set_goals(&GoalsRecord { calories, protein })?;
        writeln!(self.out, "Goals updated.\n")?;
        Ok(())
    }

    fn search_catalog(&mut self) -> Result<()> {
        let query = self.prompt("Search text: ")?;
        let matches = self.tracker.search_foods(&query)?;
        if matches.is_empty() {
            return Err(Error::Lookup("No foods found.".to_string()).into());
        }
        print_food_table(&mut self.out, &matches)?;
        Ok(())
    }

    // --- Prompts ---

    /// Print `label` and read one trimmed line. A closed input is an error.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("No input: standard input was closed");
        }
        Ok(line.trim().to_string())
    }

    /// Keep asking until the answer parses as a number `>= min`.
    fn prompt_number(&mut self, label: &str, min: Option<f64>) -> Result<f64> {
        loop {
            let input = self.prompt(label)?;
            match validate::parse_number(&input, min) {
                Ok(v) => return Ok(v),
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }
    }

    /// Like [`Self::prompt_number`] with a floor of zero; blank means unset.
    fn prompt_optional_number(&mut self, label: &str) -> Result<Option<f64>> {
        loop {
            let input = self.prompt(label)?;
            match validate::parse_optional_number(&input, Some(0.0)) {
                Ok(v) => return Ok(v),
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }
    }
}
