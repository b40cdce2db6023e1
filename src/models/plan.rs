use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::food::{FoodCategory, FoodItem, MealSlot};

/// Round to one decimal place, as displayed for macro totals.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A chosen food with its quantity multiplier (1.0 = one standard portion).
#[derive(Debug, Clone, Serialize)]
pub struct PlannedPortion {
    pub food: FoodItem,
    pub quantity: f64,
}

impl PlannedPortion {
    pub fn calories(&self) -> f64 {
        self.food.calories * self.quantity
    }

    pub fn protein(&self) -> f64 {
        self.food.protein * self.quantity
    }

    pub fn carbs(&self) -> f64 {
        self.food.carbs * self.quantity
    }

    pub fn fats(&self) -> f64 {
        self.food.fats * self.quantity
    }
}

/// One assembled meal slot. Totals always equal the sum over its portions.
#[derive(Debug, Clone, Serialize)]
pub struct MealSlotPlan {
    pub slot: MealSlot,
    pub time: &'static str,
    pub portions: Vec<PlannedPortion>,
    pub total_calories: u32,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

impl MealSlotPlan {
    /// Build a slot plan from its portions, aggregating totals.
    ///
    /// Calories round to the nearest integer, macros to one decimal.
    pub fn from_portions(slot: MealSlot, portions: Vec<PlannedPortion>) -> Self {
        let calories: f64 = portions.iter().map(PlannedPortion::calories).sum();
        let protein: f64 = portions.iter().map(PlannedPortion::protein).sum();
        let carbs: f64 = portions.iter().map(PlannedPortion::carbs).sum();
        let fats: f64 = portions.iter().map(PlannedPortion::fats).sum();

        Self {
            slot,
            time: slot.suggested_time(),
            portions,
            total_calories: calories.round() as u32,
            total_protein: round1(protein),
            total_carbs: round1(carbs),
            total_fats: round1(fats),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.portions.is_empty()
    }
}

/// One day of six assembled slots.
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub slots: Vec<MealSlotPlan>,
    pub total_calories: u32,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    /// The calorie target this day was generated against.
    pub target_calories: u32,
}

impl DayPlan {
    /// Build a day plan, aggregating the slot totals.
    pub fn new(date: NaiveDate, target_calories: u32, slots: Vec<MealSlotPlan>) -> Self {
        let calories: u32 = slots.iter().map(|s| s.total_calories).sum();
        let protein: f64 = slots.iter().map(|s| s.total_protein).sum();
        let carbs: f64 = slots.iter().map(|s| s.total_carbs).sum();
        let fats: f64 = slots.iter().map(|s| s.total_fats).sum();

        Self {
            date,
            weekday: weekday_label(date),
            slots,
            total_calories: calories,
            total_protein: round1(protein),
            total_carbs: round1(carbs),
            total_fats: round1(fats),
            target_calories,
        }
    }
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

/// Plan length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Weekly,
    Monthly,
}

impl Period {
    pub fn days(&self) -> usize {
        match self {
            Period::Weekly => 7,
            Period::Monthly => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

/// Summary statistics over a multi-day plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub avg_daily_calories: u32,
    pub avg_daily_protein: f64,
    pub distinct_foods: usize,
    /// Distinct foods as a percentage of all selections.
    pub variety_score: f64,
}

/// A multi-day meal plan with its summary.
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    pub period: Period,
    pub days: Vec<DayPlan>,
    pub summary: PlanSummary,
}

/// One consolidated shopping list line.
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingListEntry {
    pub food_id: u32,
    pub name: &'static str,
    pub category: FoodCategory,
    /// Total quantity in portions across the plan period.
    pub quantity: f64,
    /// Estimated total, rounded up.
    pub total_amount: u32,
    pub unit: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food::DietTag;

    fn portion(id: u32, calories: f64, protein: f64, quantity: f64) -> PlannedPortion {
        PlannedPortion {
            food: FoodItem {
                id,
                name: "Test item",
                category: FoodCategory::Protein,
                calories,
                protein,
                carbs: 10.0,
                fats: 2.0,
                portion_grams: 100.0,
                slots: &[MealSlot::Lunch],
                compatible: &[DietTag::GlutenFree],
                popularity: 5,
            },
            quantity,
        }
    }

    #[test]
    fn test_slot_totals_match_portions() {
        let portions = vec![portion(1, 200.0, 20.0, 1.0), portion(2, 150.0, 10.0, 0.5)];
        let plan = MealSlotPlan::from_portions(MealSlot::Lunch, portions);

        // 200*1.0 + 150*0.5 = 275
        assert_eq!(plan.total_calories, 275);
        // 20*1.0 + 10*0.5 = 25
        assert!((plan.total_protein - 25.0).abs() < 1e-9);

        let recomputed: f64 = plan.portions.iter().map(PlannedPortion::calories).sum();
        assert_eq!(plan.total_calories, recomputed.round() as u32);
    }

    #[test]
    fn test_day_totals_are_sum_of_slots() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let slots = vec![
            MealSlotPlan::from_portions(MealSlot::Breakfast, vec![portion(1, 300.0, 15.0, 1.0)]),
            MealSlotPlan::from_portions(MealSlot::Lunch, vec![portion(2, 500.0, 30.0, 1.0)]),
        ];
        let day = DayPlan::new(date, 1600, slots);

        assert_eq!(day.total_calories, 800);
        assert_eq!(day.weekday, "Monday");
        assert_eq!(
            day.total_calories,
            day.slots.iter().map(|s| s.total_calories).sum::<u32>()
        );
    }

    #[test]
    fn test_period_days() {
        assert_eq!(Period::Weekly.days(), 7);
        assert_eq!(Period::Monthly.days(), 30);
    }

    #[test]
    fn test_empty_slot() {
        let plan = MealSlotPlan::from_portions(MealSlot::LateSnack, Vec::new());
        assert!(plan.is_empty());
        assert_eq!(plan.total_calories, 0);
    }
}
