//! Session routes

use crate::state::AppState;
use axum::{extract::State, routing::{get, post}, Json, Router};
use fittrack_shared::types::SessionResponse;
use tracing::info;

/// Create session routes
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/reset", post(reset_session))
        .route("/theme", post(toggle_theme))
}

/// GET /api/v1/session - Current session snapshot
async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.session.lock().await.snapshot())
}

/// POST /api/v1/session/reset - Clear inputs and plans, keep the theme
async fn reset_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.reset();
    info!(session_id = %session.id(), "Session reset");
    Json(session.snapshot())
}

/// POST /api/v1/session/theme - Toggle light/dark
async fn toggle_theme(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    let theme = session.toggle_theme();
    info!(?theme, "Theme toggled");
    Json(session.snapshot())
}
