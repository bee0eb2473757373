//! Common test utilities for integration tests
//!
//! Builds the full router around a stub text generator so the API can be
//! exercised in-process with `oneshot`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use fittrack_backend::{
    config::AppConfig,
    routes,
    services::llm::{GenerationError, TextGenerator},
    state::AppState,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tower::ServiceExt;

pub const MEAL_PLAN: &str = "Here is your plan:\n\n**Day 1: Monday**\n* Breakfast: Oatmeal\n* Lunch: Salad\n\n\
                             **Day 2: Tuesday**\n* Breakfast: Eggs\n";

pub const WORKOUT_PLAN: &str = "Weekly plan\n**Monday: Upper Body**\n- Push-ups: 3x10\n**Tuesday: Rest**\n";

/// Generator that answers meal prompts and workout prompts with fixed text
pub struct StubGenerator {
    calls: Arc<AtomicUsize>,
    fail: bool,
    delay: Duration,
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(GenerationError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        if prompt.contains("meal plan") {
            Ok(MEAL_PLAN.to_string())
        } else {
            Ok(WORKOUT_PLAN.to_string())
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub calls: Arc<AtomicUsize>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(AppConfig::default(), false, Duration::ZERO)
    }

    /// App whose generator fails every call
    pub fn failing() -> Self {
        Self::build(AppConfig::default(), true, Duration::ZERO)
    }

    /// App whose generator takes `delay` per call
    pub fn slow(config: AppConfig, delay: Duration) -> Self {
        Self::build(config, false, delay)
    }

    fn build(config: AppConfig, fail: bool, delay: Duration) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = StubGenerator {
            calls: calls.clone(),
            fail,
            delay,
        };
        let state = AppState::new(config, Arc::new(generator));
        let app = routes::create_router(state);

        Self { app, calls }
    }

    pub fn generator_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let (status, _, body) = self.get_raw(path).await;
        (status, String::from_utf8(body).unwrap())
    }

    /// Make a GET request and keep headers and raw bytes
    pub async fn get_raw(&self, path: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, headers, body.to_vec())
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        post_json(self.app.clone(), path, body.to_string()).await
    }

    /// Start a POST request on its own task
    pub fn spawn_post(&self, path: &str, body: String) -> JoinHandle<(StatusCode, String)> {
        let app = self.app.clone();
        let path = path.to_string();
        tokio::spawn(async move { post_json(app, &path, body).await })
    }
}

async fn post_json(app: Router, path: &str, body: String) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    (status, body_str)
}

/// Plan form for a 30-year-old, 170 cm, 70 kg sedentary male aiming to lose weight
pub fn plan_form(days_per_week: u8) -> String {
    serde_json::json!({
        "name": "Alex",
        "age": 30,
        "height_cm": 170.0,
        "weight_kg": 70.0,
        "gender": "male",
        "activity_level": "sedentary",
        "country": "united_kingdom",
        "goal": "weight_loss",
        "dietary_preference": "vegetarian",
        "allergies": "peanuts",
        "workout": { "days_per_week": days_per_week, "duration_minutes": 45 }
    })
    .to_string()
}
