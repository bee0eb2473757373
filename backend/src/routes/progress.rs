//! Goal progress endpoint

use crate::error::{ApiError, ApiResult};
use axum::Json;
use fittrack_shared::health_metrics::ideal_weight_range;
use fittrack_shared::progress::{assess_goal_weight, plan_weight_change};
use fittrack_shared::types::{ProgressRequest, ProgressResponse};
use fittrack_shared::validation::{
    validate_goal_weight, validate_height_cm, validate_timeframe_weeks, validate_weight,
};

/// POST /api/v1/progress - Assess a goal weight and plan the weekly change
pub async fn plan_progress(Json(req): Json<ProgressRequest>) -> ApiResult<Json<ProgressResponse>> {
    validate_weight(req.current_weight_kg).map_err(ApiError::Validation)?;
    validate_height_cm(req.height_cm).map_err(ApiError::Validation)?;
    validate_goal_weight(req.goal_weight_kg).map_err(ApiError::Validation)?;
    validate_timeframe_weeks(req.weeks).map_err(ApiError::Validation)?;

    let (min, max) = ideal_weight_range(req.height_cm);
    let plan = plan_weight_change(req.current_weight_kg, req.goal_weight_kg, req.weeks)?;

    Ok(Json(ProgressResponse {
        assessment: assess_goal_weight(req.goal_weight_kg, (min, max)),
        ideal_weight_min_kg: min,
        ideal_weight_max_kg: max,
        plan,
    }))
}
