use serde::Serialize;

/// Food category, used by the slot composition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Protein,
    Carb,
    Vegetable,
    Fruit,
    Dairy,
    GoodFat,
    Beverage,
}

impl FoodCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "proteins",
            FoodCategory::Carb => "carbohydrates",
            FoodCategory::Vegetable => "vegetables",
            FoodCategory::Fruit => "fruits",
            FoodCategory::Dairy => "dairy",
            FoodCategory::GoodFat => "good fats",
            FoodCategory::Beverage => "beverages",
        }
    }

    /// Unit used on the shopping list.
    pub fn unit(&self) -> &'static str {
        match self {
            FoodCategory::Beverage => "ml",
            _ => "g",
        }
    }
}

/// One of the six fixed meal occasions in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
    LateSnack,
}

impl MealSlot {
    /// Slots in day order.
    pub const ALL: [MealSlot; 6] = [
        MealSlot::Breakfast,
        MealSlot::MorningSnack,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
        MealSlot::LateSnack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MorningSnack => "morning snack",
            MealSlot::Lunch => "lunch",
            MealSlot::AfternoonSnack => "afternoon snack",
            MealSlot::Dinner => "dinner",
            MealSlot::LateSnack => "late snack",
        }
    }

    pub fn suggested_time(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "07:30",
            MealSlot::MorningSnack => "10:00",
            MealSlot::Lunch => "12:30",
            MealSlot::AfternoonSnack => "16:00",
            MealSlot::Dinner => "19:30",
            MealSlot::LateSnack => "21:30",
        }
    }
}

/// Dietary restriction vocabulary. A food item lists the restrictions it is
/// compatible with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DietTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    LactoseFree,
}

impl DietTag {
    pub const ALL: [DietTag; 4] = [
        DietTag::Vegetarian,
        DietTag::Vegan,
        DietTag::GlutenFree,
        DietTag::LactoseFree,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietTag::Vegetarian => "vegetarian",
            DietTag::Vegan => "vegan",
            DietTag::GlutenFree => "gluten-free",
            DietTag::LactoseFree => "lactose-free",
        }
    }
}

/// A catalog food item with per-portion nutritional values.
///
/// Static reference data; values are per one standard portion.
#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: &'static str,
    pub category: FoodCategory,

    /// Calories per portion (kcal).
    pub calories: f64,
    /// Protein per portion (g).
    pub protein: f64,
    /// Carbohydrates per portion (g).
    pub carbs: f64,
    /// Fats per portion (g).
    pub fats: f64,

    /// Weight of one portion in grams (or ml for beverages).
    pub portion_grams: f64,

    /// Meal slots this item may appear in.
    pub slots: &'static [MealSlot],

    /// Restrictions this item is compatible with.
    pub compatible: &'static [DietTag],

    /// Selection weight, 0 (rare) to 10 (staple).
    pub popularity: u8,
}

impl FoodItem {
    pub fn fits_slot(&self, slot: MealSlot) -> bool {
        self.slots.contains(&slot)
    }

    /// True if the item is compatible with every stated restriction.
    pub fn satisfies_all(&self, restrictions: &[DietTag]) -> bool {
        restrictions.iter().all(|r| self.compatible.contains(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem {
            id: 1,
            name: "Grilled chicken breast",
            category: FoodCategory::Protein,
            calories: 198.0,
            protein: 37.0,
            carbs: 0.0,
            fats: 4.5,
            portion_grams: 120.0,
            slots: &[MealSlot::Lunch, MealSlot::Dinner],
            compatible: &[DietTag::GlutenFree, DietTag::LactoseFree],
            popularity: 9,
        }
    }

    #[test]
    fn test_fits_slot() {
        let item = sample_item();
        assert!(item.fits_slot(MealSlot::Lunch));
        assert!(item.fits_slot(MealSlot::Dinner));
        assert!(!item.fits_slot(MealSlot::Breakfast));
    }

    #[test]
    fn test_satisfies_all() {
        let item = sample_item();
        assert!(item.satisfies_all(&[]));
        assert!(item.satisfies_all(&[DietTag::GlutenFree]));
        assert!(item.satisfies_all(&[DietTag::GlutenFree, DietTag::LactoseFree]));
        assert!(!item.satisfies_all(&[DietTag::Vegetarian]));
        assert!(!item.satisfies_all(&[DietTag::GlutenFree, DietTag::Vegan]));
    }

    #[test]
    fn test_category_unit() {
        assert_eq!(FoodCategory::Beverage.unit(), "ml");
        assert_eq!(FoodCategory::Protein.unit(), "g");
        assert_eq!(FoodCategory::Fruit.unit(), "g");
    }
}
