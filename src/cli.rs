use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::Period;

/// MenuPlanner — a meal planning CLI that builds calorie-budgeted daily
/// menus and shopping lists.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub file: String,

    /// Seed for reproducible plan generation.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan and shopping list.
    Plan {
        /// Plan length. Prompted for when omitted.
        #[arg(long, value_enum)]
        period: Option<PeriodArg>,

        /// Export the shopping list to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show the energy budget for the stored profile.
    Budget,

    /// Create or update the stored profile.
    Profile,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            period: None,
            csv: None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PeriodArg {
    Weekly,
    Monthly,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Weekly => Period::Weekly,
            PeriodArg::Monthly => Period::Monthly,
        }
    }
}
