pub mod assembler;
pub mod constants;
pub mod energy;
pub mod shopping;

pub use assembler::{assemble_day, assemble_slot, generate_plan, regenerate_slot};
pub use constants::*;
pub use energy::{
    basal_metabolic_rate, body_mass_index, energy_budget, estimated_time_to_goal, macro_targets,
    meal_slot_allocation, target_calories, total_daily_expenditure, BmiClass, EnergyBudget,
    GoalEstimate, MacroTargets, SlotAllocation,
};
pub use shopping::build_shopping_list;
