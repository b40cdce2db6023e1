use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use menu_planner_rs::catalog::FoodCatalog;
use menu_planner_rs::cli::{Cli, Command};
use menu_planner_rs::error::Result;
use menu_planner_rs::interface::{
    collect_profile, display_body_metrics, display_day_plan, display_energy_budget,
    display_plan_summary, display_shopping_list, prompt_goal, prompt_period, prompt_restrictions,
    prompt_yes_no,
};
use menu_planner_rs::models::{Period, PersonProfile};
use menu_planner_rs::planner::constants::SHOPPING_HORIZON_DAYS;
use menu_planner_rs::planner::{build_shopping_list, energy_budget, generate_plan};
use menu_planner_rs::state::{export_shopping_csv, load_profile, save_profile};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { period, csv } => cmd_plan(&cli.file, period.map(Into::into), csv, cli.seed),
        Command::Budget => cmd_budget(&cli.file),
        Command::Profile => cmd_profile(&cli.file),
    }
}

/// Load the stored profile, or collect one interactively.
fn load_or_create_profile(file_path: &str) -> Result<PersonProfile> {
    let path = Path::new(file_path);

    if path.exists() {
        return load_profile(path);
    }

    println!("No profile found at {}", file_path);
    let profile = collect_profile()?;

    if prompt_yes_no("Save this profile for next time?", true)? {
        save_profile(path, &profile)?;
        println!("Profile saved to {}", file_path);
    }

    Ok(profile)
}

/// Generate and display a meal plan plus its shopping list.
fn cmd_plan(
    file_path: &str,
    period: Option<Period>,
    csv: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let profile = load_or_create_profile(file_path)?;
    let goal = prompt_goal()?;
    let period = match period {
        Some(period) => period,
        None => prompt_period()?,
    };
    let restrictions = prompt_restrictions()?;

    let budget = energy_budget(&profile, goal);
    println!();
    println!(
        "Planning {} days at {} kcal/day...",
        period.days(),
        budget.target_calories
    );

    let catalog = FoodCatalog::builtin();
    let start_date = Local::now().date_naive();

    let plan = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_plan(&catalog, start_date, period, &budget, &restrictions, &mut rng)
        }
        None => {
            let mut rng = rand::thread_rng();
            generate_plan(&catalog, start_date, period, &budget, &restrictions, &mut rng)
        }
    };

    for day in &plan.days {
        display_day_plan(day);
    }
    display_plan_summary(&plan);

    // Shopping covers the first week of the plan.
    let horizon = plan.days.len().min(SHOPPING_HORIZON_DAYS);
    let shopping_list = build_shopping_list(&plan.days[..horizon]);
    display_shopping_list(&shopping_list);

    if let Some(path) = csv {
        export_shopping_csv(&path, &shopping_list)?;
        println!("Wrote shopping list to {:?}", path);
    }

    Ok(())
}

/// Display the full energy budget and body metrics.
fn cmd_budget(file_path: &str) -> Result<()> {
    let profile = load_or_create_profile(file_path)?;
    let goal = prompt_goal()?;

    let budget = energy_budget(&profile, goal);
    display_energy_budget(&budget);
    display_body_metrics(&profile, goal);

    Ok(())
}

/// Create or update the stored profile.
fn cmd_profile(file_path: &str) -> Result<()> {
    let profile = collect_profile()?;
    save_profile(file_path, &profile)?;
    println!("Profile saved to {}", file_path);

    Ok(())
}
