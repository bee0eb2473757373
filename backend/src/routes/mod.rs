//! Route definitions for the FitTrack Pro API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod export;
mod health;
mod metrics;
mod plan;
mod progress;
mod session;

/// Create the main application router with all middleware
///
/// A request timeout is applied only when the generator has its own HTTP
/// timeout. It leaves headroom over that timeout, since one plan request
/// makes two generator calls, so plan requests end in fallback text
/// rather than a bare 408. With `ai.request_timeout_secs = 0` no request
/// is cut off.
pub fn create_router(state: AppState) -> Router {
    let generator_timeout_secs = state.config().ai.request_timeout_secs;

    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes());

    if generator_timeout_secs > 0 {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(
            generator_timeout_secs * 2 + 10,
        )));
    }

    router
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/plan", post(plan::generate_plan))
        .route("/metrics", post(metrics::compute_metrics))
        .route("/progress", post(progress::plan_progress))
        .route("/export", get(export::export_plan))
        .nest("/session", session::session_routes())
}
