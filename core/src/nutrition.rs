use crate::models::{FoodRecord, GoalsRecord, LogEntry, Macros, Remaining, Totals};

/// Round to one decimal place.
///
/// Rounds from the exact binary value of `v`, with exact ties going to the
/// even digit, so `0.3 * 1.5` (0.44999…) gives 0.4 and 53.25 gives 53.2.
/// Scaling `v` by ten first would round twice.
#[must_use]
pub fn round1(v: f64) -> f64 {
    format!("{v:.1}").parse().unwrap_or(v)
}

/// Nutrients for `amount` of `food`, each rounded to 0.1.
///
/// `food.qty_per_unit` must be positive; [`FoodRecord::validate`] and the
/// catalog loader both enforce this.
#[must_use]
pub fn scale(food: &FoodRecord, amount: f64) -> Macros {
    let factor = amount / food.qty_per_unit;
    Macros {
        kcal: round1(food.kcal * factor),
        protein: round1(food.protein * factor),
        carbs: round1(food.carbs * factor),
        fat: round1(food.fat * factor),
    }
}

/// Sum the already-scaled nutrients of `entries`.
#[must_use]
pub fn aggregate(entries: &[LogEntry]) -> Totals {
    entries.iter().fold(Totals::default(), |mut acc, e| {
        acc.kcal += e.kcal;
        acc.protein += e.protein;
        acc.carbs += e.carbs;
        acc.fat += e.fat;
        acc
    })
}

#[must_use]
pub fn remaining(goals: &GoalsRecord, totals: &Totals) -> Remaining {
    Remaining {
        calories: goals.calories.map(|g| g - totals.kcal),
        protein: goals.protein.map(|g| g - totals.protein),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn food(qty: f64, kcal: f64, protein: f64, carbs: f64, fat: f64) -> FoodRecord {
        FoodRecord {
            name: "Test".to_string(),
            unit: "g".to_string(),
            qty_per_unit: qty,
            kcal,
            protein,
            carbs,
            fat,
        }
    }

    fn entry(kcal: f64, protein: f64, carbs: f64, fat: f64) -> LogEntry {
        LogEntry {
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            meal: "Lunch".to_string(),
            name: "Test".to_string(),
            amount: 100.0,
            unit: "g".to_string(),
            kcal,
            protein,
            carbs,
            fat,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_round1() {
        assert!(approx(round1(2.7 * 1.5), 4.1));
        assert!(approx(round1(195.04), 195.0));
        assert!(approx(round1(-0.26), -0.3));
    }

    #[test]
    fn test_round1_uses_exact_binary_value() {
        assert!(approx(round1(0.3 * 1.5), 0.4));
        assert!(approx(round1(6.6 * 0.25), 1.6));
        // exact ties go to the even digit
        assert!(approx(round1(53.25), 53.2));
        assert!(approx(round1(4.75), 4.8));
        assert!(round1(f64::INFINITY).is_infinite());
    }

    #[test]
    fn test_scale_milk_50ml() {
        let milk = food(200.0, 124.0, 6.6, 9.8, 6.6);
        let m = scale(&milk, 50.0);
        assert!(approx(m.kcal, 31.0));
        assert!(approx(m.protein, 1.6));
        assert!(approx(m.carbs, 2.5));
        assert!(approx(m.fat, 1.6));
    }

    #[test]
    fn test_scale_rice_150g() {
        let rice = food(100.0, 130.0, 2.7, 28.0, 0.3);
        let m = scale(&rice, 150.0);
        assert!(approx(m.kcal, 195.0));
        assert!(approx(m.protein, 4.1));
        assert!(approx(m.carbs, 42.0));
        // 0.3 * 1.5 lands just below 0.45 in binary
        assert!(approx(m.fat, 0.4));
    }

    #[test]
    fn test_scale_identity_at_reference_quantity() {
        for f in [
            food(100.0, 130.0, 2.7, 28.0, 0.3),
            food(50.0, 120.0, 3.6, 18.0, 3.0),
            food(1.0, 78.0, 6.0, 0.6, 5.0),
            food(200.0, 124.0, 6.6, 9.8, 6.6),
        ] {
            let m = scale(&f, f.qty_per_unit);
            assert!(approx(m.kcal, f.kcal));
            assert!(approx(m.protein, f.protein));
            assert!(approx(m.carbs, f.carbs));
            assert!(approx(m.fat, f.fat));
        }
    }

    #[test]
    fn test_scale_is_linear() {
        let paneer = food(100.0, 296.0, 21.0, 6.0, 22.0);
        for a in [10.0, 37.0, 100.0, 250.0] {
            let one = scale(&paneer, a);
            let two = scale(&paneer, 2.0 * a);
            // each side is rounded to 0.1, so allow one rounding step each
            assert!((two.kcal - 2.0 * one.kcal).abs() <= 0.2 + 1e-9);
            assert!((two.protein - 2.0 * one.protein).abs() <= 0.2 + 1e-9);
        }
    }

    #[test]
    fn test_scale_large_amount() {
        let egg = food(1.0, 78.0, 6.0, 0.6, 5.0);
        let m = scale(&egg, 1000.0);
        assert!(approx(m.kcal, 78000.0));
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), Totals::default());
    }

    #[test]
    fn test_aggregate_sums() {
        let entries = vec![
            entry(195.0, 4.1, 42.0, 0.5),
            entry(240.0, 7.2, 36.0, 6.0),
            entry(78.0, 6.0, 0.6, 5.0),
        ];
        let t = aggregate(&entries);
        assert!(approx(t.kcal, 513.0));
        assert!((t.protein - 17.3).abs() < 1e-6);
        assert!((t.carbs - 78.6).abs() < 1e-6);
        assert!((t.fat - 11.5).abs() < 1e-6);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let mut entries = vec![
            entry(195.0, 4.1, 42.0, 0.5),
            entry(240.0, 7.2, 36.0, 6.0),
            entry(78.0, 6.0, 0.6, 5.0),
        ];
        let forward = aggregate(&entries);
        entries.reverse();
        let backward = aggregate(&entries);
        assert!((forward.kcal - backward.kcal).abs() < 1e-6);
        assert!((forward.protein - backward.protein).abs() < 1e-6);
        assert!((forward.carbs - backward.carbs).abs() < 1e-6);
        assert!((forward.fat - backward.fat).abs() < 1e-6);
    }

    #[test]
    fn test_remaining_under_and_over() {
        let goals = GoalsRecord {
            calories: Some(2000.0),
            protein: None,
        };
        let under = remaining(
            &goals,
            &Totals {
                kcal: 1200.0,
                ..Totals::default()
            },
        );
        assert_eq!(under.calories, Some(800.0));
        assert_eq!(under.protein, None);

        let over = remaining(
            &goals,
            &Totals {
                kcal: 2200.0,
                ..Totals::default()
            },
        );
        assert_eq!(over.calories, Some(-200.0));
    }

    #[test]
    fn test_remaining_unset_is_not_zero() {
        let r = remaining(&GoalsRecord::default(), &Totals::default());
        assert_eq!(r.calories, None);
        assert_eq!(r.protein, None);

        let goals = GoalsRecord {
            calories: Some(0.0),
            protein: Some(50.0),
        };
        let r = remaining(&goals, &Totals::default());
        assert_eq!(r.calories, Some(0.0));
        assert_eq!(r.protein, Some(50.0));
    }
}
