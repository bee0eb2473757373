//! Health metrics calculations module
//!
//! Provides calculations for BMI, weight category, ideal weight range,
//! BMR and daily calorie needs from the biometric data in a
//! [`UserProfile`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Deterministic**: Same inputs always give bit-identical outputs
//! 3. **Type Safety**: Enumerations instead of free-form strings

use crate::errors::{FitTrackError, FitTrackResult};
use crate::models::UserProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Profile Enumerations
// ============================================================================

/// Gender as entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    /// Non-binary or unspecified; BMR uses the mean of both formulas
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Activity level for calorie needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get the label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    #[default]
    WeightLoss,
    MuscleGain,
    Maintenance,
    ImproveStamina,
}

impl FitnessGoal {
    /// Daily calorie adjustment applied after the activity multiplier
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            FitnessGoal::WeightLoss => -500.0,
            FitnessGoal::MuscleGain => 300.0,
            FitnessGoal::Maintenance | FitnessGoal::ImproveStamina => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Maintenance => "Maintenance",
            FitnessGoal::ImproveStamina => "Improve Stamina",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "weight_loss" => Ok(FitnessGoal::WeightLoss),
            "muscle_gain" => Ok(FitnessGoal::MuscleGain),
            "maintenance" => Ok(FitnessGoal::Maintenance),
            "improve_stamina" => Ok(FitnessGoal::ImproveStamina),
            _ => Err(format!("Unknown fitness goal: {}", s)),
        }
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the half-open BMI range `[low, high)` for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (f64::NEG_INFINITY, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

fn ensure_positive(value: f64, field: &str) -> FitTrackResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FitTrackError::InvalidInput(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> FitTrackResult<f64> {
    ensure_positive(height_cm, "Height")?;
    ensure_positive(weight_kg, "Weight")?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Classify BMI into category. Each band includes its lower edge.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Ideal weight range for a given height, from BMI 18.5 to 24.9
///
/// The lower bound never drops below 20 kg and the upper bound never
/// exceeds 200 kg.
pub fn ideal_weight_range(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    let min_weight = (18.5 * height_m_sq).max(20.0);
    let max_weight = (24.9 * height_m_sq).min(200.0);
    (min_weight, max_weight)
}

// ============================================================================
// BMR and Calorie Calculations
// ============================================================================

fn harris_benedict_male(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64
}

fn harris_benedict_female(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
///
/// For [`Gender::Other`] the two results are averaged. This is a
/// simplification, not a physiological model.
pub fn compute_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    match gender {
        Gender::Male => harris_benedict_male(weight_kg, height_cm, age_years),
        Gender::Female => harris_benedict_female(weight_kg, height_cm, age_years),
        Gender::Other => {
            (harris_benedict_male(weight_kg, height_cm, age_years)
                + harris_benedict_female(weight_kg, height_cm, age_years))
                / 2.0
        }
    }
}

/// Calculate daily calorie needs
///
/// BMR × activity multiplier, adjusted for the goal, truncated toward zero.
pub fn compute_daily_calorie_needs(bmr: f64, activity_level: ActivityLevel, goal: FitnessGoal) -> i32 {
    let calorie_needs = bmr * activity_level.multiplier() + goal.calorie_adjustment();
    calorie_needs as i32
}

// ============================================================================
// Combined Result
// ============================================================================

/// Metrics derived from a [`UserProfile`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Ideal weight range in kg, `(min, max)`
    pub ideal_weight_range_kg: (f64, f64),
    pub bmr: f64,
    pub daily_calorie_needs: i32,
}

/// Calculate all health metrics for a profile
pub fn compute_health_metrics(profile: &UserProfile) -> FitTrackResult<HealthMetrics> {
    let bmi = compute_bmi(profile.weight_kg, profile.height_cm)?;
    let bmr = compute_bmr(profile.gender, profile.weight_kg, profile.height_cm, profile.age);

    Ok(HealthMetrics {
        bmi,
        category: categorize_bmi(bmi),
        ideal_weight_range_kg: ideal_weight_range(profile.height_cm),
        bmr,
        daily_calorie_needs: compute_daily_calorie_needs(bmr, profile.activity_level, profile.goal),
    })
}
