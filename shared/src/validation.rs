//! Input validation functions
//!
//! Bounds mirror the form controls. Values outside them are rejected
//! before any metric is computed.

use crate::models::{UserProfile, WorkoutPreferences};

fn ensure_finite(value: f64, field: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{field} must be a valid number"));
    }
    Ok(())
}

/// Validate age in years (1-120)
pub fn validate_age(age: u32) -> Result<(), String> {
    if age < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age > 120 {
        return Err("Age must be at most 120 years".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-250 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    ensure_finite(height_cm, "Height")?;
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 250.0 {
        return Err("Height must be at most 250 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    ensure_finite(weight_kg, "Weight")?;
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate a goal weight (non-negative)
pub fn validate_goal_weight(goal_weight_kg: f64) -> Result<(), String> {
    ensure_finite(goal_weight_kg, "Goal weight")?;
    if goal_weight_kg < 0.0 {
        return Err("Goal weight cannot be negative".to_string());
    }
    Ok(())
}

/// Validate workout days per week (1-7)
pub fn validate_workout_days(days: u8) -> Result<(), String> {
    if !(1..=7).contains(&days) {
        return Err("Workout days must be between 1 and 7".to_string());
    }
    Ok(())
}

/// Validate workout duration in minutes (30-120)
pub fn validate_workout_duration(minutes: u16) -> Result<(), String> {
    if !(30..=120).contains(&minutes) {
        return Err("Workout duration must be between 30 and 120 minutes".to_string());
    }
    Ok(())
}

/// Validate a planning timeframe upper bound (52 weeks)
///
/// Zero is left to the progress planner, which reports it as its own error.
pub fn validate_timeframe_weeks(weeks: u32) -> Result<(), String> {
    if weeks > 52 {
        return Err("Timeframe must be at most 52 weeks".to_string());
    }
    Ok(())
}

/// Validate free-text name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.len() > 100 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate the biometric part of a profile
pub fn validate_profile(profile: &UserProfile) -> Result<(), String> {
    validate_name(&profile.name)?;
    validate_age(profile.age)?;
    validate_height_cm(profile.height_cm)?;
    validate_weight(profile.weight_kg)?;
    if profile.allergies.len() > 500 {
        return Err("Allergies text too long".to_string());
    }
    Ok(())
}

/// Validate workout preferences
pub fn validate_workout_preferences(prefs: &WorkoutPreferences) -> Result<(), String> {
    validate_workout_days(prefs.days_per_week)?;
    validate_workout_duration(prefs.duration_minutes)
}
