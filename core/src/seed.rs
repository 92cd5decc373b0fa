use crate::models::FoodRecord;

/// name, unit, qty_per_unit, kcal, protein, carbs, fat
const STARTER_FOODS: &[(&str, &str, f64, f64, f64, f64, f64)] = &[
    ("Boiled Rice", "g", 100.0, 130.0, 2.7, 28.0, 0.3),
    // one roti is roughly 50g of dough
    ("Roti (Wheat)", "g", 50.0, 120.0, 3.6, 18.0, 3.0),
    ("Dal (Cooked)", "g", 100.0, 116.0, 7.0, 16.0, 1.2),
    ("Chole (Cooked)", "g", 100.0, 164.0, 8.9, 27.4, 2.6),
    ("Paneer", "g", 100.0, 296.0, 21.0, 6.0, 22.0),
    ("Chicken Breast (cooked)", "g", 100.0, 165.0, 31.0, 0.0, 3.6),
    ("Egg (1 large)", "serving", 1.0, 78.0, 6.0, 0.6, 5.0),
    ("Milk (Toned)", "ml", 200.0, 124.0, 6.6, 9.8, 6.6),
    ("Banana (1 medium)", "serving", 1.0, 105.0, 1.3, 27.0, 0.3),
    ("Apple (1 medium)", "serving", 1.0, 95.0, 0.5, 25.0, 0.3),
    ("Curd (Dahi)", "g", 100.0, 61.0, 3.5, 4.7, 3.3),
    ("Poha (Cooked)", "g", 100.0, 130.0, 2.5, 23.0, 2.5),
    ("Maggi (Cooked)", "g", 100.0, 210.0, 5.0, 31.0, 7.0),
    ("Aloo Paratha", "serving", 1.0, 320.0, 8.0, 45.0, 12.0),
    ("Biryani (Chicken)", "g", 100.0, 170.0, 8.0, 20.0, 6.0),
];

/// Foods written to a brand new catalog.
#[must_use]
pub fn starter_foods() -> Vec<FoodRecord> {
    STARTER_FOODS
        .iter()
        .map(
            |&(name, unit, qty_per_unit, kcal, protein, carbs, fat)| FoodRecord {
                name: name.to_string(),
                unit: unit.to_string(),
                qty_per_unit,
                kcal,
                protein,
                carbs,
                fat,
            },
        )
        .collect()
}
