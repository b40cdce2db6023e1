use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, DietTag, Goal, Period, PersonProfile, Sex};

fn parse_number<T: std::str::FromStr>(input: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for body weight in kg.
pub fn prompt_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Current weight (kg)")
        .default("75".to_string())
        .interact_text()?;
    parse_number(&input)
}

/// Prompt for height in cm.
pub fn prompt_height() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (cm)")
        .default("170".to_string())
        .interact_text()?;
    parse_number(&input)
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;
    parse_number(&input)
}

/// Prompt for an optional target weight (Enter to skip).
pub fn prompt_target_weight() -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt("Target weight in kg (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_number(&input).map(Some)
}

pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&[Sex::Male.label(), Sex::Female.label()])
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.label()).collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Goal::ALL[selection])
}

pub fn prompt_period() -> Result<Period> {
    let selection = Select::new()
        .with_prompt("Plan length")
        .items(&["weekly (7 days)", "monthly (30 days)"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        Period::Weekly
    } else {
        Period::Monthly
    })
}

/// Prompt for dietary restrictions with fuzzy matching.
///
/// Free-text entry; exact label match first, then Jaro-Winkler candidates
/// above 0.7 with confirmation.
pub fn prompt_restrictions() -> Result<Vec<DietTag>> {
    let mut restrictions: Vec<DietTag> = Vec::new();

    println!(
        "Known restrictions: {}",
        DietTag::ALL
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    );

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a restriction (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        let exact_match = DietTag::ALL
            .iter()
            .find(|t| t.label().eq_ignore_ascii_case(input));

        if let Some(tag) = exact_match {
            add_restriction(&mut restrictions, *tag);
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(DietTag, f64)> = DietTag::ALL
            .iter()
            .map(|t| (*t, jaro_winkler(t.label(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching restriction for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let tag = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", tag.label()))
                .default(true)
                .interact()?;

            if confirm {
                add_restriction(&mut restrictions, tag);
            }
        } else {
            let options: Vec<&str> = candidates.iter().map(|(t, _)| t.label()).collect();

            let mut selection_options: Vec<String> =
                options.iter().map(|s| s.to_string()).collect();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                add_restriction(&mut restrictions, candidates[selection].0);
            }
        }
    }

    Ok(restrictions)
}

fn add_restriction(restrictions: &mut Vec<DietTag>, tag: DietTag) {
    if restrictions.contains(&tag) {
        println!("Already added: {}", tag.label());
    } else {
        println!("Added: {}", tag.label());
        restrictions.push(tag);
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a complete profile interactively.
pub fn collect_profile() -> Result<PersonProfile> {
    let weight_kg = prompt_weight()?;
    let height_cm = prompt_height()?;
    let age = prompt_age()?;
    let sex = prompt_sex()?;
    let activity_level = prompt_activity_level()?;
    let target_weight_kg = prompt_target_weight()?;

    Ok(PersonProfile {
        weight_kg,
        height_cm,
        age,
        sex,
        activity_level,
        target_weight_kg,
    })
}
