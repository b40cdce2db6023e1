use crate::catalog::data;
use crate::models::{DietTag, FoodItem, MealSlot};

/// The food catalog the assembler selects from.
///
/// A closed, in-memory reference set; items are never mutated.
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    /// The embedded built-in catalog.
    pub fn builtin() -> Self {
        Self::new(data::builtin_foods())
    }

    pub fn get(&self, id: u32) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// All items tagged for a slot.
    pub fn for_slot(&self, slot: MealSlot) -> Vec<&FoodItem> {
        self.foods.iter().filter(|f| f.fits_slot(slot)).collect()
    }

    /// Items tagged for a slot and compatible with every restriction.
    pub fn compatible(&self, slot: MealSlot, restrictions: &[DietTag]) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|f| f.fits_slot(slot) && f.satisfies_all(restrictions))
            .collect()
    }

    pub fn all(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
