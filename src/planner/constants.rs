use crate::models::{ActivityLevel, Goal, MealSlot, Sex};

/// Hard safety floor for the daily calorie target (kcal).
pub const MIN_CALORIES_FEMALE: u32 = 1200;
pub const MIN_CALORIES_MALE: u32 = 1500;

/// Macro split of the daily target.
pub const PROTEIN_PCT: u32 = 30;
pub const CARB_PCT: u32 = 40;
pub const FAT_PCT: u32 = 30;

/// Energy density per macro gram (kcal/g).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Quantity multiplier clamp range for assembled portions.
pub const QUANTITY_MIN: f64 = 0.5;
pub const QUANTITY_MAX: f64 = 1.5;

/// Below this many fresh candidates, selection falls back to the full pool.
pub const MIN_FRESH_CANDIDATES: usize = 4;

/// The recently-used set is cleared every this many days.
pub const VARIETY_RESET_DAYS: usize = 3;

/// Late snack may exceed its allocation by this much (kcal).
pub const LATE_SNACK_TOLERANCE_KCAL: f64 = 20.0;

/// Average weeks per month, for the time-to-goal estimate.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Days of a plan the shopping list is aggregated over.
pub const SHOPPING_HORIZON_DAYS: usize = 7;

// Budget share of the slot allocation per composed component.
pub const MAIN_PROTEIN_SHARE: f64 = 0.40;
pub const MAIN_CARB_SHARE: f64 = 0.30;
pub const MAIN_VEGETABLE_SHARE: f64 = 0.10;
pub const MAIN_FAT_SHARE: f64 = 0.10;

pub const BREAKFAST_CARB_SHARE: f64 = 0.40;
pub const BREAKFAST_PROTEIN_SHARE: f64 = 0.35;
pub const BREAKFAST_FRUIT_SHARE: f64 = 0.15;
pub const BREAKFAST_BEVERAGE_SHARE: f64 = 0.10;

pub const SNACK_PRIMARY_SHARE: f64 = 0.60;
pub const SNACK_FAT_SHARE: f64 = 0.40;

/// TDEE multiplier for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Intense => 1.725,
        ActivityLevel::VeryIntense => 1.9,
    }
}

/// Daily calorie delta subtracted from TDEE for a goal.
///
/// Negative means a surplus.
pub fn goal_delta(goal: Goal) -> i32 {
    match goal {
        Goal::Maintain => 0,
        Goal::LoseSlow => 250,
        Goal::LoseModerate => 500,
        Goal::LoseFast => 750,
        Goal::Gain => -300,
    }
}

/// Expected weekly loss rate (kg/week) for loss goals, None otherwise.
pub fn weekly_loss_rate(goal: Goal) -> Option<f64> {
    match goal {
        Goal::LoseSlow => Some(0.25),
        Goal::LoseModerate => Some(0.5),
        Goal::LoseFast => Some(0.75),
        Goal::Maintain | Goal::Gain => None,
    }
}

/// Percentage of the daily target allocated to a slot. Sums to 100.
pub fn slot_percent(slot: MealSlot) -> u32 {
    match slot {
        MealSlot::Breakfast => 20,
        MealSlot::MorningSnack => 10,
        MealSlot::Lunch => 30,
        MealSlot::AfternoonSnack => 10,
        MealSlot::Dinner => 25,
        MealSlot::LateSnack => 5,
    }
}

/// Calorie floor for a profile's sex.
pub fn calorie_floor(sex: Sex) -> u32 {
    match sex {
        Sex::Male => MIN_CALORIES_MALE,
        Sex::Female => MIN_CALORIES_FEMALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_percents_sum_to_100() {
        let total: u32 = MealSlot::ALL.iter().map(|s| slot_percent(*s)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_macro_split_sums_to_100() {
        assert_eq!(PROTEIN_PCT + CARB_PCT + FAT_PCT, 100);
    }

    #[test]
    fn test_activity_factors_ordered() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| activity_factor(*l)).collect();
        for pair in factors.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_goal_deltas() {
        assert_eq!(goal_delta(Goal::Maintain), 0);
        assert_eq!(goal_delta(Goal::LoseFast), 750);
        assert_eq!(goal_delta(Goal::Gain), -300);
    }
}
