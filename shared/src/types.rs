//! API request and response types

use crate::health_metrics::{BmiCategory, HealthMetrics};
use crate::models::{PlanText, Theme, UserProfile, WorkoutPreferences};
use crate::progress::{GoalProgressPlan, GoalWeightAssessment};
use serde::{Deserialize, Serialize};

/// Form submission for plan generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFormRequest {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default)]
    pub workout: WorkoutPreferences,
}

/// Health metrics as shown on the health profile panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// BMI rounded to two decimals
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_label: String,
    pub ideal_weight_min_kg: f64,
    pub ideal_weight_max_kg: f64,
    pub bmr: f64,
    pub daily_calorie_needs: i32,
    /// Height formatted as feet and inches
    pub height_feet_inches: String,
    /// BMI mapped onto a 0-1 gauge (BMI 15 → 0, BMI 40 → 1)
    pub bmi_gauge: f64,
}

impl MetricsResponse {
    pub fn new(metrics: &HealthMetrics, height_feet_inches: String) -> Self {
        Self {
            bmi: (metrics.bmi * 100.0).round() / 100.0,
            category: metrics.category,
            category_label: metrics.category.description().to_string(),
            ideal_weight_min_kg: metrics.ideal_weight_range_kg.0,
            ideal_weight_max_kg: metrics.ideal_weight_range_kg.1,
            bmr: metrics.bmr,
            daily_calorie_needs: metrics.daily_calorie_needs,
            height_feet_inches,
            bmi_gauge: ((metrics.bmi - 15.0) / 25.0).clamp(0.0, 1.0),
        }
    }
}

/// Plan generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub metrics: MetricsResponse,
    pub plan: PlanText,
    /// True when the plan text came from the session cache
    pub cached: bool,
}

/// Goal progress request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRequest {
    pub current_weight_kg: f64,
    pub height_cm: f64,
    pub goal_weight_kg: f64,
    pub weeks: u32,
}

/// Goal progress response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub assessment: GoalWeightAssessment,
    pub ideal_weight_min_kg: f64,
    pub ideal_weight_max_kg: f64,
    pub plan: GoalProgressPlan,
}

/// Current session snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub theme: Theme,
    pub plan_generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsResponse>,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::{ActivityLevel, FitnessGoal, Gender};

    #[test]
    fn test_plan_form_flattens_profile() {
        let json = r#"{
            "name": "Alex",
            "age": 30,
            "height_cm": 170,
            "weight_kg": 70,
            "gender": "male",
            "activity_level": "sedentary",
            "goal": "weight_loss",
            "workout": { "days_per_week": 3, "duration_minutes": 45 }
        }"#;
        let form: PlanFormRequest = serde_json::from_str(json).unwrap();
        assert_eq!(form.profile.gender, Gender::Male);
        assert_eq!(form.profile.activity_level, ActivityLevel::Sedentary);
        assert_eq!(form.profile.goal, FitnessGoal::WeightLoss);
        assert_eq!(form.workout.days_per_week, 3);
    }

    #[test]
    fn test_metrics_response_gauge_is_clamped() {
        let metrics = HealthMetrics {
            bmi: 45.0,
            category: BmiCategory::Obese,
            ideal_weight_range_kg: (53.0, 72.0),
            bmr: 2000.0,
            daily_calorie_needs: 2400,
        };
        let response = MetricsResponse::new(&metrics, "5'6.9\"".to_string());
        assert_eq!(response.bmi_gauge, 1.0);
        assert_eq!(response.category_label, "Obese");
    }
}
