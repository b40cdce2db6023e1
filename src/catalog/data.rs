//! The embedded food table.
//!
//! Nutritional values are per one standard portion (`portion_grams`).

use crate::models::{DietTag, FoodCategory, FoodItem, MealSlot};

use DietTag::{GlutenFree, LactoseFree, Vegan, Vegetarian};
use FoodCategory::{Beverage, Carb, Dairy, Fruit, GoodFat, Protein, Vegetable};
use MealSlot::{AfternoonSnack, Breakfast, Dinner, LateSnack, Lunch, MorningSnack};

const ALL_DIETS: &[DietTag] = &[Vegetarian, Vegan, GlutenFree, LactoseFree];
const OMNIVORE: &[DietTag] = &[GlutenFree, LactoseFree];
const DAIRY_DIETS: &[DietTag] = &[Vegetarian, GlutenFree];
const EGG_DIETS: &[DietTag] = &[Vegetarian, GlutenFree, LactoseFree];

const MAIN: &[MealSlot] = &[Lunch, Dinner];

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    name: &'static str,
    category: FoodCategory,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    portion_grams: f64,
    slots: &'static [MealSlot],
    compatible: &'static [DietTag],
    popularity: u8,
) -> FoodItem {
    FoodItem {
        id,
        name,
        category,
        calories,
        protein,
        carbs,
        fats,
        portion_grams,
        slots,
        compatible,
        popularity,
    }
}

pub fn builtin_foods() -> Vec<FoodItem> {
    vec![
        // Main-meal proteins
        item(1, "Grilled chicken breast", Protein, 198.0, 37.0, 0.0, 4.5, 120.0, MAIN, OMNIVORE, 9),
        item(2, "Baked tilapia fillet", Protein, 128.0, 26.0, 0.0, 2.6, 120.0, MAIN, OMNIVORE, 7),
        item(3, "Grilled salmon", Protein, 233.0, 25.0, 0.0, 14.0, 110.0, MAIN, OMNIVORE, 8),
        item(4, "Lean beef strips", Protein, 210.0, 32.0, 0.0, 9.0, 110.0, MAIN, OMNIVORE, 8),
        item(5, "Ground turkey skillet", Protein, 180.0, 27.0, 2.0, 7.0, 110.0, MAIN, OMNIVORE, 6),
        item(6, "Roast pork loin", Protein, 190.0, 30.0, 0.0, 7.5, 110.0, MAIN, OMNIVORE, 5),
        item(7, "Grilled shrimp", Protein, 99.0, 21.0, 1.0, 1.0, 100.0, MAIN, OMNIVORE, 6),
        item(8, "Tofu cubes", Protein, 144.0, 16.0, 4.0, 8.0, 150.0, MAIN, ALL_DIETS, 5),
        item(9, "Black bean stew", Protein, 227.0, 15.0, 40.0, 1.0, 200.0, MAIN, ALL_DIETS, 7),
        item(10, "Lentil patty", Protein, 180.0, 12.0, 26.0, 4.0, 140.0, MAIN, ALL_DIETS, 5),
        item(11, "Chickpea curry", Protein, 210.0, 11.0, 30.0, 6.0, 200.0, MAIN, ALL_DIETS, 6),
        item(12, "Turkey meatballs", Protein, 200.0, 24.0, 6.0, 9.0, 120.0, MAIN, &[LactoseFree], 6),
        // Breakfast proteins
        item(13, "Scrambled eggs", Protein, 182.0, 13.0, 2.0, 13.0, 100.0, &[Breakfast], EGG_DIETS, 9),
        item(14, "Boiled eggs", Protein, 155.0, 13.0, 1.0, 11.0, 100.0, &[Breakfast, MorningSnack], EGG_DIETS, 7),
        item(15, "Tofu scramble", Protein, 160.0, 14.0, 5.0, 10.0, 130.0, &[Breakfast], ALL_DIETS, 4),
        // Main-meal carbohydrates
        item(16, "White rice", Carb, 130.0, 2.4, 28.0, 0.3, 100.0, MAIN, ALL_DIETS, 9),
        item(17, "Brown rice", Carb, 123.0, 2.7, 26.0, 1.0, 100.0, MAIN, ALL_DIETS, 7),
        item(18, "Quinoa", Carb, 120.0, 4.4, 21.0, 1.9, 100.0, MAIN, ALL_DIETS, 6),
        item(19, "Mashed potatoes", Carb, 113.0, 2.0, 17.0, 4.0, 150.0, MAIN, DAIRY_DIETS, 7),
        item(20, "Roasted sweet potato", Carb, 90.0, 2.0, 21.0, 0.1, 100.0, MAIN, ALL_DIETS, 8),
        item(21, "Whole-wheat pasta", Carb, 174.0, 7.5, 37.0, 0.8, 140.0, MAIN, &[Vegetarian, Vegan, LactoseFree], 7),
        item(22, "Couscous", Carb, 176.0, 6.0, 36.0, 0.3, 150.0, MAIN, &[Vegetarian, Vegan, LactoseFree], 4),
        item(23, "Creamy polenta", Carb, 110.0, 2.5, 23.0, 0.5, 150.0, MAIN, ALL_DIETS, 4),
        // Breakfast carbohydrates
        item(24, "Oatmeal", Carb, 150.0, 5.0, 27.0, 3.0, 40.0, &[Breakfast], ALL_DIETS, 9),
        item(25, "Whole-grain toast", Carb, 138.0, 7.0, 23.0, 2.0, 50.0, &[Breakfast], &[Vegetarian, Vegan, LactoseFree], 8),
        item(26, "Tapioca flatbread", Carb, 120.0, 0.0, 30.0, 0.0, 60.0, &[Breakfast], ALL_DIETS, 6),
        item(27, "Granola", Carb, 140.0, 4.0, 22.0, 5.0, 35.0, &[Breakfast], &[Vegetarian, LactoseFree], 6),
        item(28, "Corn tortillas", Carb, 104.0, 3.0, 21.0, 1.5, 50.0, &[Breakfast], ALL_DIETS, 4),
        // Vegetables
        item(29, "Steamed broccoli", Vegetable, 55.0, 3.7, 11.0, 0.6, 150.0, MAIN, ALL_DIETS, 8),
        item(30, "Garden salad", Vegetable, 33.0, 1.5, 6.0, 0.3, 120.0, MAIN, ALL_DIETS, 9),
        item(31, "Sauteed spinach", Vegetable, 41.0, 3.0, 4.0, 1.6, 120.0, MAIN, ALL_DIETS, 6),
        item(32, "Roasted carrots", Vegetable, 52.0, 1.0, 12.0, 0.2, 120.0, MAIN, ALL_DIETS, 7),
        item(33, "Grilled zucchini", Vegetable, 33.0, 2.0, 6.0, 0.6, 120.0, MAIN, ALL_DIETS, 6),
        item(34, "Green beans", Vegetable, 44.0, 2.4, 10.0, 0.2, 125.0, MAIN, ALL_DIETS, 6),
        item(35, "Beet salad", Vegetable, 59.0, 2.0, 13.0, 0.2, 130.0, MAIN, ALL_DIETS, 4),
        item(36, "Cauliflower rice", Vegetable, 40.0, 3.0, 8.0, 0.3, 150.0, MAIN, ALL_DIETS, 5),
        item(37, "Sauteed kale", Vegetable, 50.0, 3.5, 7.0, 1.4, 110.0, MAIN, ALL_DIETS, 4),
        item(38, "Tomato and cucumber salad", Vegetable, 30.0, 1.2, 6.5, 0.2, 140.0, MAIN, ALL_DIETS, 7),
        // Fruits
        item(39, "Banana", Fruit, 105.0, 1.3, 27.0, 0.4, 120.0, &[Breakfast, MorningSnack, AfternoonSnack], ALL_DIETS, 9),
        item(40, "Apple", Fruit, 72.0, 0.4, 19.0, 0.2, 140.0, &[Breakfast, MorningSnack, AfternoonSnack, LateSnack], ALL_DIETS, 9),
        item(41, "Papaya slices", Fruit, 62.0, 1.0, 16.0, 0.4, 160.0, &[Breakfast, MorningSnack], ALL_DIETS, 6),
        item(42, "Orange", Fruit, 62.0, 1.2, 15.0, 0.2, 130.0, &[MorningSnack, AfternoonSnack, LateSnack], ALL_DIETS, 8),
        item(43, "Strawberries", Fruit, 35.0, 0.7, 8.0, 0.3, 110.0, &[Breakfast, MorningSnack, AfternoonSnack, LateSnack], ALL_DIETS, 7),
        item(44, "Grapes", Fruit, 62.0, 0.6, 16.0, 0.3, 90.0, &[AfternoonSnack, LateSnack], ALL_DIETS, 6),
        item(45, "Mango cubes", Fruit, 99.0, 1.4, 25.0, 0.6, 165.0, &[Breakfast, AfternoonSnack], ALL_DIETS, 6),
        item(46, "Pineapple slices", Fruit, 82.0, 0.9, 22.0, 0.2, 165.0, &[MorningSnack, AfternoonSnack], ALL_DIETS, 5),
        // Dairy
        item(47, "Plain yogurt", Dairy, 90.0, 5.0, 7.0, 4.5, 150.0, &[Breakfast, MorningSnack, AfternoonSnack, LateSnack], DAIRY_DIETS, 8),
        item(48, "Greek yogurt", Dairy, 97.0, 17.0, 6.0, 0.7, 170.0, &[Breakfast, MorningSnack, AfternoonSnack], DAIRY_DIETS, 8),
        item(49, "Cottage cheese", Dairy, 98.0, 11.0, 3.0, 4.3, 100.0, &[Breakfast, AfternoonSnack, LateSnack], DAIRY_DIETS, 5),
        item(50, "Skim milk", Dairy, 83.0, 8.0, 12.0, 0.2, 240.0, &[Breakfast], DAIRY_DIETS, 6),
        item(51, "Lactose-free milk", Dairy, 80.0, 8.0, 12.0, 0.0, 240.0, &[Breakfast], &[Vegetarian, GlutenFree, LactoseFree], 4),
        item(52, "Kefir", Dairy, 66.0, 3.8, 7.0, 2.5, 170.0, &[Breakfast, LateSnack], DAIRY_DIETS, 4),
        // Good fats
        item(53, "Almonds", GoodFat, 104.0, 3.8, 3.9, 9.0, 18.0, &[MorningSnack, AfternoonSnack], ALL_DIETS, 8),
        item(54, "Walnuts", GoodFat, 98.0, 2.3, 2.0, 9.8, 15.0, &[MorningSnack, AfternoonSnack], ALL_DIETS, 6),
        item(55, "Peanut butter", GoodFat, 94.0, 4.0, 3.5, 8.0, 16.0, &[Breakfast, MorningSnack, AfternoonSnack], ALL_DIETS, 8),
        item(56, "Avocado", GoodFat, 80.0, 1.0, 4.3, 7.3, 50.0, &[Breakfast, Lunch, Dinner], ALL_DIETS, 8),
        item(57, "Olive oil drizzle", GoodFat, 80.0, 0.0, 0.0, 9.0, 9.0, MAIN, ALL_DIETS, 9),
        item(58, "Chia seeds", GoodFat, 69.0, 2.4, 6.0, 4.4, 14.0, &[Breakfast, MorningSnack], ALL_DIETS, 5),
        item(59, "Cashews", GoodFat, 98.0, 3.0, 5.5, 7.8, 17.0, &[AfternoonSnack], ALL_DIETS, 5),
        item(60, "Pumpkin seeds", GoodFat, 80.0, 4.3, 1.5, 7.0, 14.0, &[Lunch, Dinner, AfternoonSnack], ALL_DIETS, 4),
        item(61, "Sunflower seed mix", GoodFat, 95.0, 3.0, 4.0, 8.0, 16.0, &[Lunch, Dinner, MorningSnack], ALL_DIETS, 4),
        // Beverages
        item(62, "Black coffee", Beverage, 5.0, 0.3, 0.0, 0.0, 200.0, &[Breakfast], ALL_DIETS, 9),
        item(63, "Green tea", Beverage, 2.0, 0.0, 0.5, 0.0, 200.0, &[Breakfast], ALL_DIETS, 7),
        item(64, "Orange juice", Beverage, 112.0, 1.7, 26.0, 0.5, 250.0, &[Breakfast], ALL_DIETS, 7),
    ]
}
