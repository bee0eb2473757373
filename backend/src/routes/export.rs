//! Plan export route

use crate::error::{ApiError, ApiResult};
use crate::services::ExportService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
};
use tracing::info;

/// GET /api/v1/export - Download the session's plan as a PDF
///
/// Responds 409 until a plan has been generated.
pub async fn export_plan(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let (fields, plan) = {
        let session = state.session.lock().await;
        match (session.summary_fields(), session.plan()) {
            (Some(fields), Some(plan)) => (fields, plan.clone()),
            _ => {
                return Err(ApiError::Conflict(
                    "No plan has been generated in this session".to_string(),
                ))
            }
        }
    };

    let pdf = tokio::task::spawn_blocking(move || ExportService::export_pdf(&fields, &plan))
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Export task failed: {}", e)))??;

    let disposition = format!("attachment; filename=\"{}\"", state.config().export.filename);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid export filename: {}", e)))?,
    );

    info!(bytes = pdf.len(), "Plan exported");
    Ok((headers, pdf))
}
