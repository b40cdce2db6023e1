use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::PersonProfile;

/// Load a profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<PersonProfile> {
    let content = fs::read_to_string(path)?;
    let profile: PersonProfile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Save a profile to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &PersonProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Sex};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_roundtrip() {
        let profile = PersonProfile {
            weight_kg: 80.0,
            height_cm: 175.0,
            age: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::Sedentary,
            target_weight_kg: Some(74.0),
        };

        let file = NamedTempFile::new().unwrap();
        save_profile(file.path(), &profile).unwrap();

        let reloaded = load_profile(file.path()).unwrap();
        assert_eq!(reloaded.age, 30);
        assert_eq!(reloaded.sex, Sex::Male);
        assert_eq!(reloaded.activity_level, ActivityLevel::Sedentary);
        assert_eq!(reloaded.target_weight_kg, Some(74.0));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(load_profile(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_profile("no_such_profile.json").is_err());
    }
}
