use std::collections::HashMap;

use crate::models::{DayPlan, FoodItem, ShoppingListEntry};

/// Aggregate a collection of day plans into one consolidated shopping list.
///
/// A pure fold keyed by food id: quantities accumulate across every slot of
/// every day, the total amount is `ceil(quantity * portion_grams)`, and the
/// result is grouped by category, then name. Day ordering does not affect
/// the output; an empty plan yields an empty list.
pub fn build_shopping_list(days: &[DayPlan]) -> Vec<ShoppingListEntry> {
    let mut totals: HashMap<u32, (FoodItem, f64)> = HashMap::new();

    for day in days {
        for slot in &day.slots {
            for portion in &slot.portions {
                totals
                    .entry(portion.food.id)
                    .and_modify(|(_, qty)| *qty += portion.quantity)
                    .or_insert_with(|| (portion.food.clone(), portion.quantity));
            }
        }
    }

    let mut entries: Vec<ShoppingListEntry> = totals
        .into_values()
        .map(|(food, quantity)| {
            let quantity = (quantity * 100.0).round() / 100.0;
            ShoppingListEntry {
                food_id: food.id,
                name: food.name,
                category: food.category,
                quantity,
                total_amount: (quantity * food.portion_grams).ceil() as u32,
                unit: food.category.unit(),
            }
        })
        .collect();

    entries.sort_by(|a, b| (a.category, a.name).cmp(&(b.category, b.name)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DietTag, FoodCategory, MealSlot, MealSlotPlan, PlannedPortion,
    };
    use chrono::NaiveDate;

    fn item(id: u32, name: &'static str, category: FoodCategory, grams: f64) -> FoodItem {
        FoodItem {
            id,
            name,
            category,
            calories: 100.0,
            protein: 5.0,
            carbs: 10.0,
            fats: 3.0,
            portion_grams: grams,
            slots: &[MealSlot::Lunch],
            compatible: &[DietTag::GlutenFree],
            popularity: 5,
        }
    }

    fn day_with(portions: Vec<PlannedPortion>) -> DayPlan {
        let slot = MealSlotPlan::from_portions(MealSlot::Lunch, portions);
        DayPlan::new(
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            1600,
            vec![slot],
        )
    }

    #[test]
    fn test_quantities_accumulate_across_days() {
        let rice = item(1, "White rice", FoodCategory::Carb, 100.0);

        let day1 = day_with(vec![PlannedPortion {
            food: rice.clone(),
            quantity: 1.0,
        }]);
        let day2 = day_with(vec![PlannedPortion {
            food: rice.clone(),
            quantity: 0.75,
        }]);

        let list = build_shopping_list(&[day1, day2]);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].quantity, 1.75);
        assert_eq!(list[0].total_amount, 175);
        assert_eq!(list[0].unit, "g");
    }

    #[test]
    fn test_amount_rounds_up() {
        let carrots = item(2, "Roasted carrots", FoodCategory::Vegetable, 90.0);
        let day = day_with(vec![PlannedPortion {
            food: carrots,
            quantity: 0.75,
        }]);

        let list = build_shopping_list(&[day]);
        // 0.75 * 90 = 67.5 -> 68
        assert_eq!(list[0].total_amount, 68);
    }

    #[test]
    fn test_day_order_does_not_matter() {
        let rice = item(1, "White rice", FoodCategory::Carb, 100.0);
        let chicken = item(2, "Grilled chicken breast", FoodCategory::Protein, 120.0);

        let day1 = day_with(vec![
            PlannedPortion {
                food: rice.clone(),
                quantity: 1.25,
            },
            PlannedPortion {
                food: chicken.clone(),
                quantity: 1.0,
            },
        ]);
        let day2 = day_with(vec![PlannedPortion {
            food: rice.clone(),
            quantity: 0.5,
        }]);
        let day3 = day_with(vec![PlannedPortion {
            food: chicken.clone(),
            quantity: 1.5,
        }]);

        let forward = build_shopping_list(&[day1.clone(), day2.clone(), day3.clone()]);
        let backward = build_shopping_list(&[day3, day1, day2]);

        assert_eq!(forward.len(), backward.len());
        for (a, b) in forward.iter().zip(backward.iter()) {
            assert_eq!(a.food_id, b.food_id);
            assert_eq!(a.quantity, b.quantity);
            assert_eq!(a.total_amount, b.total_amount);
        }
    }

    #[test]
    fn test_grouped_by_category_then_name() {
        let day = day_with(vec![
            PlannedPortion {
                food: item(1, "White rice", FoodCategory::Carb, 100.0),
                quantity: 1.0,
            },
            PlannedPortion {
                food: item(2, "Grilled chicken breast", FoodCategory::Protein, 120.0),
                quantity: 1.0,
            },
            PlannedPortion {
                food: item(3, "Brown rice", FoodCategory::Carb, 100.0),
                quantity: 1.0,
            },
        ]);

        let list = build_shopping_list(&[day]);
        assert_eq!(list[0].category, FoodCategory::Protein);
        assert_eq!(list[1].name, "Brown rice");
        assert_eq!(list[2].name, "White rice");
    }

    #[test]
    fn test_beverages_use_ml() {
        let day = day_with(vec![PlannedPortion {
            food: item(9, "Orange juice", FoodCategory::Beverage, 200.0),
            quantity: 1.0,
        }]);

        let list = build_shopping_list(&[day]);
        assert_eq!(list[0].unit, "ml");
    }

    #[test]
    fn test_empty_plan_yields_empty_list() {
        assert!(build_shopping_list(&[]).is_empty());
    }
}
