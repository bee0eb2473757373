//! Integration tests for the health check endpoint

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["provider"], "stub");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = common::TestApp::new();

    let (status, _) = app.get("/api/v1/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
