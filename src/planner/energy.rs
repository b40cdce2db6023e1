use serde::Serialize;

use crate::models::{Goal, MealSlot, PersonProfile, Sex};
use crate::planner::constants::*;

/// Daily macro gram targets with the split they were derived from.
///
/// Grams round independently, so converting back to calories may differ
/// from the target by a few kcal.
#[derive(Debug, Clone, Serialize)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fats_pct: u32,
}

/// Calorie allocation for one meal slot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlotAllocation {
    pub slot: MealSlot,
    pub percent: u32,
    pub calories: u32,
}

/// The full derived energy budget for a profile and goal.
#[derive(Debug, Clone, Serialize)]
pub struct EnergyBudget {
    /// Basal metabolic rate, unrounded.
    pub bmr: f64,
    /// Total daily energy expenditure, rounded.
    pub tdee: u32,
    /// Goal-adjusted daily calorie target, floored at the safety minimum.
    pub target_calories: u32,
    pub macros: MacroTargets,
    pub slots: [SlotAllocation; 6],
}

impl EnergyBudget {
    pub fn allocation_for(&self, slot: MealSlot) -> u32 {
        self.slots
            .iter()
            .find(|a| a.slot == slot)
            .map(|a| a.calories)
            .unwrap_or(0)
    }
}

/// Mifflin-St Jeor basal metabolic rate (kcal/day), unrounded.
pub fn basal_metabolic_rate(profile: &PersonProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64;
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure: BMR scaled by activity, rounded.
pub fn total_daily_expenditure(profile: &PersonProfile) -> u32 {
    (basal_metabolic_rate(profile) * activity_factor(profile.activity_level)).round() as u32
}

/// Goal-adjusted daily calorie target.
///
/// Always floored at 1200 kcal (female) / 1500 kcal (male), no matter how
/// aggressive the requested goal is.
pub fn target_calories(profile: &PersonProfile, goal: Goal) -> u32 {
    let tdee = total_daily_expenditure(profile) as i64;
    let raw = tdee - goal_delta(goal) as i64;
    let floor = calorie_floor(profile.sex) as i64;
    raw.max(floor) as u32
}

/// Macro gram targets for a daily calorie amount (30/40/30 split).
pub fn macro_targets(calories: u32) -> MacroTargets {
    let cal = calories as f64;
    let protein_g = (cal * PROTEIN_PCT as f64 / 100.0 / KCAL_PER_G_PROTEIN).round() as u32;
    let carbs_g = (cal * CARB_PCT as f64 / 100.0 / KCAL_PER_G_CARB).round() as u32;
    let fats_g = (cal * FAT_PCT as f64 / 100.0 / KCAL_PER_G_FAT).round() as u32;

    MacroTargets {
        protein_g,
        carbs_g,
        fats_g,
        protein_pct: PROTEIN_PCT,
        carbs_pct: CARB_PCT,
        fats_pct: FAT_PCT,
    }
}

/// Per-slot calorie allocation for a daily target. Percentages sum to 100;
/// per-slot values round independently.
pub fn meal_slot_allocation(calories: u32) -> [SlotAllocation; 6] {
    MealSlot::ALL.map(|slot| {
        let percent = slot_percent(slot);
        SlotAllocation {
            slot,
            percent,
            calories: (calories as f64 * percent as f64 / 100.0).round() as u32,
        }
    })
}

/// Derive the complete energy budget for a profile and goal.
pub fn energy_budget(profile: &PersonProfile, goal: Goal) -> EnergyBudget {
    let target = target_calories(profile, goal);
    EnergyBudget {
        bmr: basal_metabolic_rate(profile),
        tdee: total_daily_expenditure(profile),
        target_calories: target,
        macros: macro_targets(target),
        slots: meal_slot_allocation(target),
    }
}

/// Body mass index from weight (kg) and height (cm).
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// The six standard BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiClass {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25.0 {
            BmiClass::Normal
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else if bmi < 35.0 {
            BmiClass::ObesityI
        } else if bmi < 40.0 {
            BmiClass::ObesityII
        } else {
            BmiClass::ObesityIII
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "underweight",
            BmiClass::Normal => "normal weight",
            BmiClass::Overweight => "overweight",
            BmiClass::ObesityI => "obesity class I",
            BmiClass::ObesityII => "obesity class II",
            BmiClass::ObesityIII => "obesity class III",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Below the healthy range; consider a gaining goal.",
            BmiClass::Normal => "Within the healthy range.",
            BmiClass::Overweight => "Slightly above the healthy range.",
            BmiClass::ObesityI => "Moderately above the healthy range.",
            BmiClass::ObesityII => "Well above the healthy range.",
            BmiClass::ObesityIII => "Far above the healthy range; seek medical guidance.",
        }
    }
}

/// Estimated time to reach a target weight under a loss goal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GoalEstimate {
    pub weeks: u32,
    pub months: u32,
}

/// None when the target is not below the current weight, or the goal has no
/// defined loss rate (maintain, gain).
pub fn estimated_time_to_goal(
    current_kg: f64,
    target_kg: f64,
    goal: Goal,
) -> Option<GoalEstimate> {
    if target_kg >= current_kg {
        return None;
    }
    let rate = weekly_loss_rate(goal)?;

    let weeks = ((current_kg - target_kg) / rate).ceil() as u32;
    let months = (weeks as f64 / WEEKS_PER_MONTH).round() as u32;
    Some(GoalEstimate { weeks, months })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;
    use assert_float_eq::assert_float_absolute_eq;

    fn male_profile() -> PersonProfile {
        PersonProfile {
            weight_kg: 80.0,
            height_cm: 175.0,
            age: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::Sedentary,
            target_weight_kg: None,
        }
    }

    fn female_profile() -> PersonProfile {
        PersonProfile {
            sex: Sex::Female,
            ..male_profile()
        }
    }

    #[test]
    fn test_bmr_male_reference() {
        // 10*80 + 6.25*175 - 5*30 + 5 = 1761.75
        assert_float_absolute_eq!(basal_metabolic_rate(&male_profile()), 1761.75, 1e-9);
    }

    #[test]
    fn test_bmr_sex_difference_is_166() {
        let male = basal_metabolic_rate(&male_profile());
        let female = basal_metabolic_rate(&female_profile());
        assert_float_absolute_eq!(male - female, 166.0, 1e-9);
    }

    #[test]
    fn test_tdee_sedentary() {
        // round(1761.75 * 1.2) = 2114
        assert_eq!(total_daily_expenditure(&male_profile()), 2114);
    }

    #[test]
    fn test_target_moderate_loss() {
        assert_eq!(target_calories(&male_profile(), Goal::LoseModerate), 1614);
    }

    #[test]
    fn test_target_hits_male_floor() {
        // 2114 - 750 = 1364, below the 1500 floor
        assert_eq!(target_calories(&male_profile(), Goal::LoseFast), 1500);
    }

    #[test]
    fn test_target_hits_female_floor() {
        let profile = PersonProfile {
            weight_kg: 50.0,
            height_cm: 155.0,
            age: 45,
            sex: Sex::Female,
            activity_level: ActivityLevel::Sedentary,
            target_weight_kg: None,
        };
        // BMR = 500 + 968.75 - 225 - 161 = 1082.75, TDEE = 1299
        assert_eq!(target_calories(&profile, Goal::LoseFast), 1200);
    }

    #[test]
    fn test_target_gain_surplus() {
        assert_eq!(target_calories(&male_profile(), Goal::Gain), 2114 + 300);
    }

    #[test]
    fn test_macro_grams_convert_back_within_tolerance() {
        for calories in [1200u32, 1614, 2114, 2500, 3000] {
            let macros = macro_targets(calories);
            let back = macros.protein_g as f64 * KCAL_PER_G_PROTEIN
                + macros.carbs_g as f64 * KCAL_PER_G_CARB
                + macros.fats_g as f64 * KCAL_PER_G_FAT;
            assert!(
                (back - calories as f64).abs() <= 9.0,
                "{} kcal round-trips to {}",
                calories,
                back
            );
        }
    }

    #[test]
    fn test_slot_allocation_sums_near_target() {
        for calories in [1200u32, 1614, 2114, 2731] {
            let slots = meal_slot_allocation(calories);
            let pct: u32 = slots.iter().map(|a| a.percent).sum();
            assert_eq!(pct, 100);

            let total: u32 = slots.iter().map(|a| a.calories).sum();
            assert!(
                (total as i64 - calories as i64).abs() <= 3,
                "slots for {} sum to {}",
                calories,
                total
            );
        }
    }

    #[test]
    fn test_energy_budget_composition() {
        let budget = energy_budget(&male_profile(), Goal::LoseModerate);
        assert_eq!(budget.tdee, 2114);
        assert_eq!(budget.target_calories, 1614);
        assert_eq!(budget.allocation_for(MealSlot::Lunch), 484);
        assert_eq!(budget.allocation_for(MealSlot::LateSnack), 81);
    }

    #[test]
    fn test_bmi_classification_bands() {
        assert_eq!(BmiClass::classify(17.0), BmiClass::Underweight);
        assert_eq!(BmiClass::classify(18.5), BmiClass::Normal);
        assert_eq!(BmiClass::classify(24.9), BmiClass::Normal);
        assert_eq!(BmiClass::classify(26.1), BmiClass::Overweight);
        assert_eq!(BmiClass::classify(32.0), BmiClass::ObesityI);
        assert_eq!(BmiClass::classify(37.5), BmiClass::ObesityII);
        assert_eq!(BmiClass::classify(41.0), BmiClass::ObesityIII);
    }

    #[test]
    fn test_bmi_value() {
        // 80 / 1.75^2 = 26.12...
        let bmi = body_mass_index(80.0, 175.0);
        assert_float_absolute_eq!(bmi, 26.122, 0.001);
        assert_eq!(BmiClass::classify(bmi), BmiClass::Overweight);
    }

    #[test]
    fn test_time_to_goal_moderate() {
        // 10 kg at 0.5 kg/week = 20 weeks, round(20/4.33) = 5 months
        let est = estimated_time_to_goal(80.0, 70.0, Goal::LoseModerate).unwrap();
        assert_eq!(est.weeks, 20);
        assert_eq!(est.months, 5);
    }

    #[test]
    fn test_time_to_goal_rounds_weeks_up() {
        // 1.1 kg at 0.25 kg/week = 4.4 -> 5 weeks
        let est = estimated_time_to_goal(70.0, 68.9, Goal::LoseSlow).unwrap();
        assert_eq!(est.weeks, 5);
    }

    #[test]
    fn test_time_to_goal_none_cases() {
        assert!(estimated_time_to_goal(80.0, 85.0, Goal::LoseFast).is_none());
        assert!(estimated_time_to_goal(80.0, 80.0, Goal::LoseFast).is_none());
        assert!(estimated_time_to_goal(80.0, 70.0, Goal::Maintain).is_none());
        assert!(estimated_time_to_goal(80.0, 70.0, Goal::Gain).is_none());
    }
}
