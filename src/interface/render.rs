use crate::models::{DayPlan, FoodCategory, Goal, MealPlan, PersonProfile, ShoppingListEntry};
use crate::planner::energy::{body_mass_index, estimated_time_to_goal, BmiClass, EnergyBudget};

/// Display the derived energy budget.
pub fn display_energy_budget(budget: &EnergyBudget) {
    println!();
    println!("=== Energy Budget ===");
    println!();
    println!("BMR:    {:.0} kcal/day", budget.bmr);
    println!("TDEE:   {} kcal/day", budget.tdee);
    println!("Target: {} kcal/day", budget.target_calories);
    println!();

    let m = &budget.macros;
    println!(
        "Macros: protein {} g ({}%), carbs {} g ({}%), fats {} g ({}%)",
        m.protein_g, m.protein_pct, m.carbs_g, m.carbs_pct, m.fats_g, m.fats_pct
    );
    println!();

    println!("Per-slot allocation:");
    for alloc in &budget.slots {
        println!(
            "  {:<16} {:>3}%  {:>5} kcal",
            alloc.slot.label(),
            alloc.percent,
            alloc.calories
        );
    }
    println!();
}

/// Display BMI and, when a target weight is set, the time-to-goal estimate.
pub fn display_body_metrics(profile: &PersonProfile, goal: Goal) {
    let bmi = body_mass_index(profile.weight_kg, profile.height_cm);
    let class = BmiClass::classify(bmi);

    println!("BMI: {:.1} ({})", bmi, class.label());
    println!("  {}", class.description());

    if let Some(target) = profile.target_weight_kg {
        match estimated_time_to_goal(profile.weight_kg, target, goal) {
            Some(est) => println!(
                "Estimated time to {} kg: {} weeks (~{} months)",
                target, est.weeks, est.months
            ),
            None => println!("No time estimate for this goal/target combination."),
        }
    }
    println!();
}

/// Display a single day's meals.
pub fn display_day_plan(day: &DayPlan) {
    println!();
    println!(
        "=== {} {} — {} kcal (target {}) ===",
        day.weekday, day.date, day.total_calories, day.target_calories
    );

    for slot in &day.slots {
        println!();
        println!("  {} ({})", slot.slot.label(), slot.time);

        if slot.is_empty() {
            println!("    (nothing fit this slot)");
            continue;
        }

        for portion in &slot.portions {
            println!(
                "    {:<28} x{:<5} {:>4.0} kcal",
                portion.food.name,
                portion.quantity,
                portion.calories()
            );
        }
        println!(
            "    = {} kcal | P {:.1} g, C {:.1} g, F {:.1} g",
            slot.total_calories, slot.total_protein, slot.total_carbs, slot.total_fats
        );
    }
    println!();
}

/// Display the plan-level summary statistics.
pub fn display_plan_summary(plan: &MealPlan) {
    println!("--- Summary ({}) ---", plan.period.label());
    println!("Days planned: {}", plan.days.len());
    println!(
        "Average: {} kcal/day, {:.1} g protein/day",
        plan.summary.avg_daily_calories, plan.summary.avg_daily_protein
    );
    println!(
        "Variety: {} distinct foods ({:.1}% of selections)",
        plan.summary.distinct_foods, plan.summary.variety_score
    );
    println!();
}

/// Display the consolidated shopping list grouped by category.
pub fn display_shopping_list(entries: &[ShoppingListEntry]) {
    if entries.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    println!("=== Shopping List ({} items) ===", entries.len());

    let mut current: Option<FoodCategory> = None;
    for entry in entries {
        if current != Some(entry.category) {
            println!();
            println!("  {}:", entry.category.label());
            current = Some(entry.category);
        }
        println!(
            "    {:<28} {:>5} {}",
            entry.name, entry.total_amount, entry.unit
        );
    }
    println!();
}
