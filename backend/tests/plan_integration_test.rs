//! Integration tests for plan generation, session state and export

mod common;

use axum::http::{header, StatusCode};
use common::{plan_form, TestApp, MEAL_PLAN, WORKOUT_PLAN};
use fittrack_backend::config::AppConfig;
use fittrack_shared::models::Theme;
use fittrack_shared::types::{PlanResponse, SessionResponse};
use std::time::Duration;

#[tokio::test]
async fn test_plan_generation_returns_metrics_and_text() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/v1/plan", &plan_form(4)).await;

    assert_eq!(status, StatusCode::OK);
    let response: PlanResponse = serde_json::from_str(&body).unwrap();
    assert!(!response.cached);
    assert_eq!(response.metrics.daily_calorie_needs, 1506);
    assert_eq!(response.plan.meal_plan, MEAL_PLAN);
    assert_eq!(response.plan.workout_plan, WORKOUT_PLAN);
    assert_eq!(app.generator_calls(), 2);
}

#[tokio::test]
async fn test_unchanged_inputs_reuse_plans() {
    let app = TestApp::new();

    app.post("/api/v1/plan", &plan_form(4)).await;
    let (status, body) = app.post("/api/v1/plan", &plan_form(4)).await;

    assert_eq!(status, StatusCode::OK);
    let response: PlanResponse = serde_json::from_str(&body).unwrap();
    assert!(response.cached);
    assert_eq!(app.generator_calls(), 2);
}

#[tokio::test]
async fn test_changed_inputs_regenerate_plans() {
    let app = TestApp::new();

    app.post("/api/v1/plan", &plan_form(4)).await;
    let (_, body) = app.post("/api/v1/plan", &plan_form(6)).await;

    let response: PlanResponse = serde_json::from_str(&body).unwrap();
    assert!(!response.cached);
    assert_eq!(app.generator_calls(), 4);
}

#[tokio::test]
async fn test_generator_failure_yields_fallback_text() {
    let app = TestApp::failing();

    let (status, body) = app.post("/api/v1/plan", &plan_form(4)).await;

    assert_eq!(status, StatusCode::OK);
    let response: PlanResponse = serde_json::from_str(&body).unwrap();
    assert!(response.plan.meal_plan.starts_with("I'm sorry"));
    assert!(response.plan.workout_plan.starts_with("I'm sorry"));
}

#[tokio::test]
async fn test_invalid_workout_days_rejected_without_generating() {
    let app = TestApp::new();

    let (status, _) = app.post("/api/v1/plan", &plan_form(9)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.generator_calls(), 0);
}

#[tokio::test]
async fn test_export_requires_generated_plan() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/export").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("CONFLICT"));
}

#[tokio::test]
async fn test_export_returns_pdf_attachment() {
    let app = TestApp::new();
    app.post("/api/v1/plan", &plan_form(4)).await;

    let (status, headers, body) = app.get_raw("/api/v1/export").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"FitTrack_Pro_Fitness_Plan.pdf\""
    );
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_session_snapshot_reset_and_theme() {
    let app = TestApp::new();
    app.post("/api/v1/plan", &plan_form(4)).await;

    let (status, body) = app.get("/api/v1/session").await;
    assert_eq!(status, StatusCode::OK);
    let snapshot: SessionResponse = serde_json::from_str(&body).unwrap();
    assert!(snapshot.plan_generated);
    assert_eq!(snapshot.profile.unwrap().name, "Alex");
    assert_eq!(snapshot.theme, Theme::Light);

    let (_, body) = app.post("/api/v1/session/theme", "").await;
    let toggled: SessionResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(toggled.theme, Theme::Dark);

    let (_, body) = app.post("/api/v1/session/reset", "").await;
    let reset: SessionResponse = serde_json::from_str(&body).unwrap();
    assert!(!reset.plan_generated);
    assert!(reset.profile.is_none());
    assert_eq!(reset.theme, Theme::Dark);
    assert_eq!(reset.session_id, snapshot.session_id);

    let (status, _) = app.get("/api/v1/export").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test(start_paused = true)]
async fn test_slow_generator_without_timeout_still_returns_plans() {
    let mut config = AppConfig::default();
    config.ai.request_timeout_secs = 0;
    let app = TestApp::slow(config, Duration::from_secs(60));

    let (status, body) = app.post("/api/v1/plan", &plan_form(4)).await;

    assert_eq!(status, StatusCode::OK);
    let response: PlanResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.plan.meal_plan, MEAL_PLAN);
    assert_eq!(response.plan.workout_plan, WORKOUT_PLAN);
}

#[tokio::test(start_paused = true)]
async fn test_session_stays_available_during_generation() {
    let app = TestApp::slow(AppConfig::default(), Duration::from_secs(30));

    let pending = app.spawn_post("/api/v1/plan", plan_form(4));
    tokio::time::sleep(Duration::from_secs(1)).await;

    let (status, body) = tokio::time::timeout(Duration::from_secs(5), app.get("/api/v1/session"))
        .await
        .expect("session read waited for generation");
    assert_eq!(status, StatusCode::OK);
    let snapshot: SessionResponse = serde_json::from_str(&body).unwrap();
    assert!(!snapshot.plan_generated);

    let (status, _) = tokio::time::timeout(Duration::from_secs(5), app.post("/api/v1/session/theme", ""))
        .await
        .expect("theme toggle waited for generation");
    assert_eq!(status, StatusCode::OK);

    let (status, _) = pending.await.unwrap();
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/v1/session").await;
    let snapshot: SessionResponse = serde_json::from_str(&body).unwrap();
    assert!(snapshot.plan_generated);
    assert_eq!(snapshot.theme, Theme::Dark);
}
