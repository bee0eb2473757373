//! FitTrack Pro WASM Module
//!
//! WebAssembly bindings over the shared metric calculations, so the form
//! can show BMI and the feet/inches preview while the user types.
//!
//! Enumerations are passed as their form labels ("Lightly Active",
//! "Weight Loss", ...). Invalid input yields `0` / an empty string rather
//! than a JS exception.

use fittrack_shared::health_metrics::{
    categorize_bmi, compute_bmi, compute_bmr, compute_daily_calorie_needs, ideal_weight_range,
    ActivityLevel, FitnessGoal, Gender,
};
use fittrack_shared::units::cm_to_feet_inches;
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    compute_bmi(weight_kg, height_cm).unwrap_or(0.0)
}

/// BMI category label, e.g. "Normal weight"
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    categorize_bmi(bmi).description().to_string()
}

/// Ideal weight range as `[min, max]` in kg
#[wasm_bindgen]
pub fn ideal_weight(height_cm: f64) -> Vec<f64> {
    let (min, max) = ideal_weight_range(height_cm);
    vec![min, max]
}

/// Calculate BMR (Harris-Benedict)
#[wasm_bindgen]
pub fn calculate_bmr(gender: &str, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    match gender.parse::<Gender>() {
        Ok(gender) => compute_bmr(gender, weight_kg, height_cm, age_years),
        Err(_) => 0.0,
    }
}

/// Daily calorie needs for a BMR, activity level and goal
#[wasm_bindgen]
pub fn daily_calorie_needs(bmr: f64, activity_level: &str, goal: &str) -> i32 {
    match (activity_level.parse::<ActivityLevel>(), goal.parse::<FitnessGoal>()) {
        (Ok(activity), Ok(goal)) => compute_daily_calorie_needs(bmr, activity, goal),
        _ => 0,
    }
}

/// Height in feet and inches, e.g. `5'6.9"`
#[wasm_bindgen]
pub fn height_feet_inches(height_cm: f64) -> String {
    if height_cm <= 0.0 || !height_cm.is_finite() {
        return String::new();
    }
    cm_to_feet_inches(height_cm)
}
