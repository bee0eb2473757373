//! Data models for FitTrack Pro

use crate::health_metrics::{ActivityLevel, FitnessGoal, Gender, HealthMetrics};
use crate::units::cm_to_feet_inches;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Country of residence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    #[default]
    UnitedStates,
    India,
    UnitedKingdom,
    Canada,
    Australia,
    Other,
}

impl Country {
    pub fn label(&self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::India => "India",
            Country::UnitedKingdom => "United Kingdom",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Other => "Other",
        }
    }
}

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    #[default]
    NoRestrictions,
    Vegetarian,
    Vegan,
    Pescatarian,
    Keto,
    Paleo,
}

impl DietaryPreference {
    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::NoRestrictions => "No Restrictions",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::Pescatarian => "Pescatarian",
            DietaryPreference::Keto => "Keto",
            DietaryPreference::Paleo => "Paleo",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Biometric and preference data entered by the user
///
/// Held unchanged for the duration of one plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub country: Country,
    pub goal: FitnessGoal,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    /// Free text, comma-separated
    #[serde(default)]
    pub allergies: String,
}

impl UserProfile {
    /// Dietary restriction text sent with a meal plan request,
    /// e.g. `"Vegan. Allergies: peanuts. "`
    pub fn dietary_restrictions(&self) -> String {
        let mut restrictions = format!("{}. ", self.dietary_preference);
        let allergies = self.allergies.trim();
        if !allergies.is_empty() {
            restrictions.push_str(&format!("Allergies: {allergies}. "));
        }
        restrictions
    }

    /// Ordered `(label, value)` pairs for the personal information
    /// section of an exported plan
    pub fn summary_fields(&self, metrics: &HealthMetrics) -> Vec<(String, String)> {
        vec![
            ("Name".to_string(), self.name.clone()),
            ("Age".to_string(), self.age.to_string()),
            (
                "Height".to_string(),
                format!("{} cm ({})", self.height_cm, cm_to_feet_inches(self.height_cm)),
            ),
            ("Weight".to_string(), format!("{} kg", self.weight_kg)),
            ("Gender".to_string(), self.gender.to_string()),
            ("BMI".to_string(), format!("{:.2}", metrics.bmi)),
            ("Category".to_string(), metrics.category.to_string()),
            (
                "Daily Calorie Needs".to_string(),
                format!("{} kcal", metrics.daily_calorie_needs),
            ),
        ]
    }
}

/// Workout scheduling preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPreferences {
    /// 1-7
    pub days_per_week: u8,
    /// 30-120
    pub duration_minutes: u16,
}

impl Default for WorkoutPreferences {
    fn default() -> Self {
        Self {
            days_per_week: 4,
            duration_minutes: 60,
        }
    }
}

/// Generated plan text, kept verbatim as returned by the text generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlanText {
    pub meal_plan: String,
    pub workout_plan: String,
}

/// Display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Return the other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::compute_health_metrics;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Sam".to_string(),
            age: 30,
            height_cm: 170.0,
            weight_kg: 70.0,
            gender: Gender::Female,
            activity_level: ActivityLevel::ModeratelyActive,
            country: Country::India,
            goal: FitnessGoal::Maintenance,
            dietary_preference: DietaryPreference::Vegan,
            allergies: "peanuts, soy".to_string(),
        }
    }

    #[test]
    fn test_dietary_restrictions_with_allergies() {
        assert_eq!(profile().dietary_restrictions(), "Vegan. Allergies: peanuts, soy. ");
    }

    #[test]
    fn test_dietary_restrictions_without_allergies() {
        let mut p = profile();
        p.allergies = "   ".to_string();
        assert_eq!(p.dietary_restrictions(), "Vegan. ");
    }

    #[test]
    fn test_summary_fields_order_and_format() {
        let p = profile();
        let metrics = compute_health_metrics(&p).unwrap();
        let fields = p.summary_fields(&metrics);

        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["Name", "Age", "Height", "Weight", "Gender", "BMI", "Category", "Daily Calorie Needs"]
        );
        assert_eq!(fields[2].1, "170 cm (5'6.9\")");
        assert_eq!(fields[3].1, "70 kg");
        assert_eq!(fields[5].1, "24.22");
        assert_eq!(fields[6].1, "Normal weight");
        assert!(fields[7].1.ends_with(" kcal"));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let json = r#"{
            "name": "Jo",
            "age": 41,
            "height_cm": 182.5,
            "weight_kg": 90,
            "gender": "other",
            "activity_level": "very_active",
            "goal": "improve_stamina"
        }"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.country, Country::UnitedStates);
        assert_eq!(p.dietary_preference, DietaryPreference::NoRestrictions);
        assert!(p.allergies.is_empty());
        assert_eq!(p.gender, Gender::Other);
    }
}
