//! Per-user session context
//!
//! Holds the inputs and outputs of the most recent submission so that
//! export and theme changes can reuse them without resubmitting the form.

use crate::services::plans::PlanRequest;
use fittrack_shared::health_metrics::HealthMetrics;
use fittrack_shared::models::{PlanText, Theme, UserProfile};
use fittrack_shared::types::{MetricsResponse, SessionResponse};
use fittrack_shared::units::cm_to_feet_inches;
use uuid::Uuid;

/// Session state
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    theme: Theme,
    profile: Option<UserProfile>,
    metrics: Option<HealthMetrics>,
    /// Plan text together with the request it was generated from
    plan: Option<(PlanRequest, PlanText)>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            theme: Theme::default(),
            profile: None,
            metrics: None,
            plan: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn metrics(&self) -> Option<&HealthMetrics> {
        self.metrics.as_ref()
    }

    pub fn plan(&self) -> Option<&PlanText> {
        self.plan.as_ref().map(|(_, text)| text)
    }

    pub fn plan_generated(&self) -> bool {
        self.plan.is_some()
    }

    /// Flip the theme and return the new one
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Clear profile, metrics and plan; the theme and id survive
    pub fn reset(&mut self) {
        self.profile = None;
        self.metrics = None;
        self.plan = None;
    }

    /// Record the latest validated profile and its metrics
    pub fn record_profile(&mut self, profile: UserProfile, metrics: HealthMetrics) {
        self.profile = Some(profile);
        self.metrics = Some(metrics);
    }

    /// Cached plan text, only if it was generated from an identical request
    pub fn cached_plan_for(&self, request: &PlanRequest) -> Option<&PlanText> {
        match &self.plan {
            Some((cached_request, text)) if cached_request == request => Some(text),
            _ => None,
        }
    }

    pub fn store_plan(&mut self, request: PlanRequest, plan: PlanText) {
        self.plan = Some((request, plan));
    }

    /// Ordered `(label, value)` pairs for the export's personal section
    pub fn summary_fields(&self) -> Option<Vec<(String, String)>> {
        match (&self.profile, &self.metrics) {
            (Some(profile), Some(metrics)) => Some(profile.summary_fields(metrics)),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> SessionResponse {
        SessionResponse {
            session_id: self.id.to_string(),
            theme: self.theme,
            plan_generated: self.plan_generated(),
            profile: self.profile.clone(),
            metrics: match (&self.profile, &self.metrics) {
                (Some(profile), Some(metrics)) => Some(MetricsResponse::new(
                    metrics,
                    cm_to_feet_inches(profile.height_cm),
                )),
                _ => None,
            },
        }
    }
}
