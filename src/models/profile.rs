use serde::{Deserialize, Serialize};

/// Biological sex, as used by the Mifflin-St Jeor formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Daily activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
    VeryIntense,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
        ActivityLevel::VeryIntense,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary (little or no exercise)",
            ActivityLevel::Light => "light (1-3 sessions/week)",
            ActivityLevel::Moderate => "moderate (3-5 sessions/week)",
            ActivityLevel::Intense => "intense (6-7 sessions/week)",
            ActivityLevel::VeryIntense => "very intense (physical job or 2x/day)",
        }
    }
}

/// Weight-change goal. Each goal maps to a fixed daily calorie delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Maintain,
    LoseSlow,
    LoseModerate,
    LoseFast,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::Maintain,
        Goal::LoseSlow,
        Goal::LoseModerate,
        Goal::LoseFast,
        Goal::Gain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain weight",
            Goal::LoseSlow => "lose weight slowly (~0.25 kg/week)",
            Goal::LoseModerate => "lose weight moderately (~0.5 kg/week)",
            Goal::LoseFast => "lose weight fast (~0.75 kg/week)",
            Goal::Gain => "gain weight",
        }
    }
}

/// Immutable input to the energy budget calculator.
///
/// The optional target weight is only used for the time-to-goal estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_json_roundtrip() {
        let profile = PersonProfile {
            weight_kg: 80.0,
            height_cm: 175.0,
            age: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::Sedentary,
            target_weight_kg: Some(72.0),
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"sedentary\""));
        assert!(json.contains("\"male\""));

        let back: PersonProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.age, 30);
        assert_eq!(back.sex, Sex::Male);
        assert_eq!(back.target_weight_kg, Some(72.0));
    }

    #[test]
    fn test_target_weight_optional() {
        let json = r#"{
            "weight_kg": 62.0,
            "height_cm": 160.0,
            "age": 41,
            "sex": "female",
            "activity_level": "light"
        }"#;

        let profile: PersonProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sex, Sex::Female);
        assert!(profile.target_weight_kg.is_none());
    }
}
