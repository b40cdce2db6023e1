use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::FoodCatalog;
use crate::models::{
    DayPlan, DietTag, FoodCategory, FoodItem, MealPlan, MealSlot, MealSlotPlan, Period,
    PlanSummary, PlannedPortion,
};
use crate::planner::constants::*;
use crate::planner::energy::EnergyBudget;

/// Build the ordered candidate pool for a slot.
///
/// Items not in `recently_used` are preferred; if fewer than
/// MIN_FRESH_CANDIDATES remain, the full filtered set is used instead.
/// The pool is shuffled, then stably sorted by popularity so that
/// equal-popularity items keep a random relative order.
fn candidate_pool<'a>(
    catalog: &'a FoodCatalog,
    slot: MealSlot,
    restrictions: &[DietTag],
    recently_used: &HashSet<u32>,
    rng: &mut impl Rng,
) -> Vec<&'a FoodItem> {
    let filtered = catalog.compatible(slot, restrictions);

    let fresh: Vec<&FoodItem> = filtered
        .iter()
        .copied()
        .filter(|f| !recently_used.contains(&f.id))
        .collect();

    let mut pool = if fresh.len() >= MIN_FRESH_CANDIDATES {
        fresh
    } else {
        filtered
    };

    pool.shuffle(rng);
    pool.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    pool
}

/// Remove and return the first pool item of the given category.
fn take_category<'a>(
    pool: &mut Vec<&'a FoodItem>,
    category: FoodCategory,
) -> Option<&'a FoodItem> {
    let idx = pool.iter().position(|f| f.category == category)?;
    Some(pool.remove(idx))
}

/// A portion sized toward `share` of the slot allocation.
///
/// The multiplier is clamped rather than solved exactly; a few dozen kcal of
/// overshoot or undershoot per slot is accepted.
fn portion_for(item: &FoodItem, share: f64, allocation: f64) -> PlannedPortion {
    let budget = allocation * share;
    let quantity = if item.calories > 0.0 {
        (budget / item.calories).clamp(QUANTITY_MIN, QUANTITY_MAX)
    } else {
        1.0
    };

    PlannedPortion {
        food: item.clone(),
        quantity: (quantity * 100.0).round() / 100.0,
    }
}

fn compose_main_meal(
    pool: &mut Vec<&FoodItem>,
    allocation: f64,
    portions: &mut Vec<PlannedPortion>,
) {
    if let Some(item) = take_category(pool, FoodCategory::Protein) {
        portions.push(portion_for(item, MAIN_PROTEIN_SHARE, allocation));
    }
    if let Some(item) = take_category(pool, FoodCategory::Carb) {
        portions.push(portion_for(item, MAIN_CARB_SHARE, allocation));
    }
    for _ in 0..2 {
        if let Some(item) = take_category(pool, FoodCategory::Vegetable) {
            portions.push(portion_for(item, MAIN_VEGETABLE_SHARE, allocation));
        }
    }
    if let Some(item) = take_category(pool, FoodCategory::GoodFat) {
        portions.push(portion_for(item, MAIN_FAT_SHARE, allocation));
    }
}

fn compose_breakfast(
    pool: &mut Vec<&FoodItem>,
    allocation: f64,
    portions: &mut Vec<PlannedPortion>,
) {
    if let Some(item) = take_category(pool, FoodCategory::Carb) {
        portions.push(portion_for(item, BREAKFAST_CARB_SHARE, allocation));
    }
    if let Some(item) = take_category(pool, FoodCategory::Protein)
        .or_else(|| take_category(pool, FoodCategory::Dairy))
    {
        portions.push(portion_for(item, BREAKFAST_PROTEIN_SHARE, allocation));
    }

    // Optional extras, only while they fit the remaining budget at the
    // minimum multiplier.
    let mut current: f64 = portions.iter().map(PlannedPortion::calories).sum();
    if let Some(item) = take_category(pool, FoodCategory::Fruit) {
        if current + item.calories * QUANTITY_MIN <= allocation {
            let portion = portion_for(item, BREAKFAST_FRUIT_SHARE, allocation);
            current += portion.calories();
            portions.push(portion);
        }
    }
    if let Some(item) = take_category(pool, FoodCategory::Beverage) {
        if current + item.calories * QUANTITY_MIN <= allocation {
            portions.push(portion_for(item, BREAKFAST_BEVERAGE_SHARE, allocation));
        }
    }
}

fn compose_snack(
    pool: &mut Vec<&FoodItem>,
    allocation: f64,
    portions: &mut Vec<PlannedPortion>,
    rng: &mut impl Rng,
) {
    // Coin flip between a fruit-based and a dairy-based combo; the other
    // category stands in when the chosen one has no candidates.
    let (primary, fallback) = if rng.gen_bool(0.5) {
        (FoodCategory::Fruit, FoodCategory::Dairy)
    } else {
        (FoodCategory::Dairy, FoodCategory::Fruit)
    };

    if let Some(item) = take_category(pool, primary).or_else(|| take_category(pool, fallback)) {
        portions.push(portion_for(item, SNACK_PRIMARY_SHARE, allocation));
    }
    if let Some(item) = take_category(pool, FoodCategory::GoodFat) {
        portions.push(portion_for(item, SNACK_FAT_SHARE, allocation));
    }
}

fn compose_late_snack(
    pool: &mut Vec<&FoodItem>,
    allocation: f64,
    portions: &mut Vec<PlannedPortion>,
) {
    // A single light item at quantity 1, only if it fits the allocation
    // plus a small tolerance.
    let idx = pool.iter().position(|f| {
        matches!(f.category, FoodCategory::Dairy | FoodCategory::Fruit)
            && f.calories <= allocation + LATE_SNACK_TOLERANCE_KCAL
    });

    if let Some(idx) = idx {
        portions.push(PlannedPortion {
            food: pool.remove(idx).clone(),
            quantity: 1.0,
        });
    }
}

/// Assemble one meal slot against its calorie allocation.
///
/// A restriction set that empties the candidate pool produces a smaller or
/// empty slot, never an error. Every chosen item id is recorded into
/// `recently_used`.
pub fn assemble_slot(
    catalog: &FoodCatalog,
    slot: MealSlot,
    allocation: u32,
    restrictions: &[DietTag],
    recently_used: &mut HashSet<u32>,
    rng: &mut impl Rng,
) -> MealSlotPlan {
    let mut pool = candidate_pool(catalog, slot, restrictions, recently_used, rng);
    let alloc = allocation as f64;
    let mut portions = Vec::new();

    match slot {
        MealSlot::Lunch | MealSlot::Dinner => compose_main_meal(&mut pool, alloc, &mut portions),
        MealSlot::Breakfast => compose_breakfast(&mut pool, alloc, &mut portions),
        MealSlot::MorningSnack | MealSlot::AfternoonSnack => {
            compose_snack(&mut pool, alloc, &mut portions, rng)
        }
        MealSlot::LateSnack => compose_late_snack(&mut pool, alloc, &mut portions),
    }

    for portion in &portions {
        recently_used.insert(portion.food.id);
    }

    MealSlotPlan::from_portions(slot, portions)
}

/// Assemble a full day: all six slots against the budget's allocations.
pub fn assemble_day(
    catalog: &FoodCatalog,
    date: NaiveDate,
    budget: &EnergyBudget,
    restrictions: &[DietTag],
    recently_used: &mut HashSet<u32>,
    rng: &mut impl Rng,
) -> DayPlan {
    let slots = MealSlot::ALL
        .iter()
        .map(|slot| {
            assemble_slot(
                catalog,
                *slot,
                budget.allocation_for(*slot),
                restrictions,
                recently_used,
                rng,
            )
        })
        .collect();

    DayPlan::new(date, budget.target_calories, slots)
}

/// Generate a multi-day plan.
///
/// The recently-used set threads through the day loop to bias selection away
/// from repeats, and is cleared every VARIETY_RESET_DAYS days so the
/// candidate pool never starves.
pub fn generate_plan(
    catalog: &FoodCatalog,
    start_date: NaiveDate,
    period: Period,
    budget: &EnergyBudget,
    restrictions: &[DietTag],
    rng: &mut impl Rng,
) -> MealPlan {
    let mut recently_used = HashSet::new();
    let mut days = Vec::with_capacity(period.days());

    for offset in 0..period.days() {
        if offset > 0 && offset % VARIETY_RESET_DAYS == 0 {
            recently_used.clear();
        }

        let date = start_date + Duration::days(offset as i64);
        days.push(assemble_day(
            catalog,
            date,
            budget,
            restrictions,
            &mut recently_used,
            rng,
        ));
    }

    let summary = summarize(&days);
    MealPlan {
        period,
        days,
        summary,
    }
}

/// Re-assemble one slot, excluding every item currently in it.
///
/// The current items seed the recently-used set, so with at least
/// MIN_FRESH_CANDIDATES alternatives none of them is selected again.
pub fn regenerate_slot(
    catalog: &FoodCatalog,
    current: &MealSlotPlan,
    allocation: u32,
    restrictions: &[DietTag],
    rng: &mut impl Rng,
) -> MealSlotPlan {
    let mut recently_used: HashSet<u32> =
        current.portions.iter().map(|p| p.food.id).collect();

    assemble_slot(
        catalog,
        current.slot,
        allocation,
        restrictions,
        &mut recently_used,
        rng,
    )
}

fn summarize(days: &[DayPlan]) -> PlanSummary {
    let count = days.len().max(1) as f64;
    let total_calories: u32 = days.iter().map(|d| d.total_calories).sum();
    let total_protein: f64 = days.iter().map(|d| d.total_protein).sum();

    let mut distinct = HashSet::new();
    let mut selections = 0usize;
    for day in days {
        for slot in &day.slots {
            for portion in &slot.portions {
                distinct.insert(portion.food.id);
                selections += 1;
            }
        }
    }

    let variety_score = if selections > 0 {
        (distinct.len() as f64 / selections as f64 * 1000.0).round() / 10.0
    } else {
        0.0
    };

    PlanSummary {
        avg_daily_calories: (total_calories as f64 / count).round() as u32,
        avg_daily_protein: (total_protein / count * 10.0).round() / 10.0,
        distinct_foods: distinct.len(),
        variety_score,
    }
}
