//! Health metrics endpoint

use crate::error::{ApiError, ApiResult};
use axum::Json;
use fittrack_shared::health_metrics::compute_health_metrics;
use fittrack_shared::models::UserProfile;
use fittrack_shared::types::MetricsResponse;
use fittrack_shared::units::cm_to_feet_inches;
use fittrack_shared::validation::validate_profile;
use tracing::debug;

/// POST /api/v1/metrics - Compute BMI, ideal weight, BMR and calorie needs
///
/// Pure computation; the session is not touched.
pub async fn compute_metrics(Json(profile): Json<UserProfile>) -> ApiResult<Json<MetricsResponse>> {
    validate_profile(&profile).map_err(ApiError::Validation)?;

    let metrics = compute_health_metrics(&profile)?;
    debug!(
        bmi = metrics.bmi,
        category = %metrics.category,
        calories = metrics.daily_calorie_needs,
        "Metrics computed"
    );

    Ok(Json(MetricsResponse::new(
        &metrics,
        cm_to_feet_inches(profile.height_cm),
    )))
}
