//! Plan generation endpoint

use crate::error::{ApiError, ApiResult};
use crate::services::{PlanRequest, PlanService};
use crate::state::AppState;
use axum::{extract::State, Json};
use fittrack_shared::health_metrics::compute_health_metrics;
use fittrack_shared::types::{MetricsResponse, PlanFormRequest, PlanResponse};
use fittrack_shared::units::cm_to_feet_inches;
use fittrack_shared::validation::{validate_profile, validate_workout_preferences};
use tracing::info;

/// POST /api/v1/plan - Validate the form, compute metrics and produce plans
///
/// Plans are reused from the session when the calorie goal, restrictions,
/// fitness goal and workout preferences are unchanged. Any difference
/// triggers a fresh pair of generator calls.
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanFormRequest>,
) -> ApiResult<Json<PlanResponse>> {
    validate_profile(&req.profile).map_err(ApiError::Validation)?;
    validate_workout_preferences(&req.workout).map_err(ApiError::Validation)?;

    let metrics = compute_health_metrics(&req.profile)?;
    let request = PlanRequest::new(&req.profile, metrics.daily_calorie_needs, &req.workout);

    // Not held across generator calls
    let cached_plan = {
        let session = state.session.lock().await;
        let cached_plan = session.cached_plan_for(&request).cloned();
        match &cached_plan {
            Some(_) => info!(session_id = %session.id(), "Reusing plans for unchanged inputs"),
            None if session.plan_generated() => {
                info!(session_id = %session.id(), "Plan inputs changed, regenerating")
            }
            None => {}
        }
        cached_plan
    };

    let cached = cached_plan.is_some();
    let plan = match cached_plan {
        Some(plan) => plan,
        None => PlanService::request_plans(state.generator(), &request).await,
    };

    let metrics_response = MetricsResponse::new(&metrics, cm_to_feet_inches(req.profile.height_cm));

    let mut session = state.session.lock().await;
    if !cached {
        session.store_plan(request, plan.clone());
    }
    session.record_profile(req.profile, metrics);

    Ok(Json(PlanResponse {
        metrics: metrics_response,
        plan,
        cached,
    }))
}
