//! Meal and workout plan requests
//!
//! Builds natural-language prompts from the user's inputs and makes one
//! call to the text generator per plan. Failures never propagate: the
//! caller always receives text, either the generated plan or a fixed
//! fallback message.

use crate::services::llm::{GenerationError, TextGenerator};
use fittrack_shared::errors::FitTrackError;
use fittrack_shared::health_metrics::FitnessGoal;
use fittrack_shared::models::{PlanText, UserProfile, WorkoutPreferences};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Returned when the generator answers with no text
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I apologize, but I couldn't generate a response at this time. Please try again later.";

/// Returned when the generator call fails
pub const ERROR_FALLBACK: &str =
    "I'm sorry, but there was an error generating a response. Please try again later.";

/// Inputs a plan pair is generated from
///
/// Two requests that compare equal produce interchangeable plans, which is
/// what the session cache keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub calorie_goal: i32,
    pub restrictions: String,
    pub goal: FitnessGoal,
    pub days_per_week: u8,
    pub duration_minutes: u16,
}

impl PlanRequest {
    pub fn new(profile: &UserProfile, calorie_goal: i32, workout: &WorkoutPreferences) -> Self {
        Self {
            calorie_goal,
            restrictions: profile.dietary_restrictions(),
            goal: profile.goal,
            days_per_week: workout.days_per_week,
            duration_minutes: workout.duration_minutes,
        }
    }
}

/// Prompt for a 7-day meal plan
pub fn meal_plan_prompt(calorie_goal: i32, restrictions: &str) -> String {
    format!(
        "Generate a sample 7-day meal plan for a person with a daily calorie goal of {calorie_goal} calories.\n\
         The meal plan should include breakfast, lunch, dinner, and two snacks per day.\n\
         Dietary restrictions: {restrictions}\n\
         Provide the meal plan in a clear and organized format, using bullet points for each day."
    )
}

/// Prompt for a weekly workout plan
pub fn workout_plan_prompt(goal: FitnessGoal, days_per_week: u8, duration_minutes: u16) -> String {
    format!(
        "Create a sample weekly workout plan for someone aiming to {goal},\n\
         who wants to work out {days_per_week} days a week, with each workout lasting\n\
         around {duration_minutes} minutes.\n\
         Include a variety of exercises targeting different muscle groups.\n\
         Provide clear instructions for each exercise and day."
    )
}

/// Plan request service
pub struct PlanService;

impl PlanService {
    /// Request a 7-day meal plan
    pub async fn request_meal_plan(
        generator: &dyn TextGenerator,
        calorie_goal: i32,
        restrictions: &str,
    ) -> String {
        let prompt = meal_plan_prompt(calorie_goal, restrictions);
        Self::generate_or_fallback(generator, "meal", &prompt).await
    }

    /// Request a weekly workout plan
    pub async fn request_workout_plan(
        generator: &dyn TextGenerator,
        goal: FitnessGoal,
        days_per_week: u8,
        duration_minutes: u16,
    ) -> String {
        let prompt = workout_plan_prompt(goal, days_per_week, duration_minutes);
        Self::generate_or_fallback(generator, "workout", &prompt).await
    }

    /// Request both plans, meal plan first
    pub async fn request_plans(generator: &dyn TextGenerator, request: &PlanRequest) -> PlanText {
        let meal_plan =
            Self::request_meal_plan(generator, request.calorie_goal, &request.restrictions).await;
        let workout_plan = Self::request_workout_plan(
            generator,
            request.goal,
            request.days_per_week,
            request.duration_minutes,
        )
        .await;

        PlanText {
            meal_plan,
            workout_plan,
        }
    }

    async fn generate_or_fallback(generator: &dyn TextGenerator, kind: &str, prompt: &str) -> String {
        match generator.generate(prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(
                    plan = kind,
                    provider = generator.provider_name(),
                    chars = text.len(),
                    "Plan generated"
                );
                text
            }
            Ok(_) | Err(GenerationError::EmptyResponse) => {
                warn!(plan = kind, provider = generator.provider_name(), "Generator returned no text");
                EMPTY_RESPONSE_FALLBACK.to_string()
            }
            Err(e) => {
                let failure = FitTrackError::from(e);
                warn!(
                    plan = kind,
                    provider = generator.provider_name(),
                    error = %failure,
                    "Plan generation failed"
                );
                ERROR_FALLBACK.to_string()
            }
        }
    }
}
