mod food;
mod plan;
mod profile;

pub use food::{DietTag, FoodCategory, FoodItem, MealSlot};
pub use plan::{
    weekday_label, DayPlan, MealPlan, MealSlotPlan, Period, PlanSummary, PlannedPortion,
    ShoppingListEntry,
};
pub use profile::{ActivityLevel, Goal, PersonProfile, Sex};
