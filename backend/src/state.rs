//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The configuration and text generator are built once at startup and
//! are read-only afterwards. The session is the only mutable piece and
//! sits behind an async mutex.

use crate::config::AppConfig;
use crate::services::llm::TextGenerator;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state
///
/// All fields are `Arc`s, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Text generator used for meal and workout plans
    pub generator: Arc<dyn TextGenerator>,
    /// The single interactive session
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    /// Create a new application state with a fresh session
    pub fn new(config: AppConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config: Arc::new(config),
            generator,
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the text generator
    #[inline]
    pub fn generator(&self) -> &dyn TextGenerator {
        self.generator.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::llm::GenerationError;
    use async_trait::async_trait;

    struct NoopGenerator;

    #[async_trait]
    impl TextGenerator for NoopGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }

        fn provider_name(&self) -> &'static str {
            "noop"
        }
    }

    #[tokio::test]
    async fn test_clones_share_session() {
        let state = AppState::new(AppConfig::default(), Arc::new(NoopGenerator));
        let cloned = state.clone();

        cloned.session.lock().await.toggle_theme();

        let theme = state.session.lock().await.theme();
        assert_eq!(theme, fittrack_shared::models::Theme::Dark);
        assert_eq!(state.generator().provider_name(), "noop");
    }
}
