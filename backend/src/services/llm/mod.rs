//! Text generation clients
//!
//! The plan builder talks to an external generative-text service through
//! the [`TextGenerator`] trait: one prompt in, one response string out.
//! Implementations exist for Google Gemini and a local Ollama server.

mod gemini;
mod ollama;

pub use gemini::GeminiClient;
pub use ollama::OllamaClient;

use crate::config::{AiConfig, AiProvider};
use async_trait::async_trait;
use fittrack_shared::errors::FitTrackError;
use secrecy::Secret;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Text generation failure
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response")]
    EmptyResponse,
}

impl From<GenerationError> for FitTrackError {
    fn from(err: GenerationError) -> Self {
        FitTrackError::ExternalServiceFailure(err.to_string())
    }
}

/// External text-generation collaborator
///
/// A single call per prompt. No retries are performed by callers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}

/// Build the configured text generator
///
/// A missing Gemini key does not fail startup; every call then returns
/// [`GenerationError::MissingApiKey`] and the plan builder falls back.
pub fn build_generator(config: &AiConfig) -> anyhow::Result<Arc<dyn TextGenerator>> {
    let mut builder = reqwest::Client::builder();
    if config.request_timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
    }
    let client = builder.build()?;

    let generator: Arc<dyn TextGenerator> = match config.provider {
        AiProvider::Gemini => {
            if config.gemini_api_key.is_none() {
                warn!("No Gemini API key configured; plan generation will return fallback text");
            }
            Arc::new(GeminiClient::new(
                client,
                &config.gemini_base_url,
                &config.model,
                config.gemini_api_key.clone().map(Secret::new),
            ))
        }
        AiProvider::Ollama => Arc::new(OllamaClient::new(client, &config.ollama_url, &config.model)),
    };

    info!(provider = generator.provider_name(), model = %config.model, "Text generator configured");
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_maps_to_external_service_failure() {
        let err = FitTrackError::from(GenerationError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        });
        assert_eq!(
            err,
            FitTrackError::ExternalServiceFailure(
                "API returned status 429: quota exceeded".to_string()
            )
        );
    }

    #[test]
    fn test_build_gemini_without_key() {
        let config = AiConfig::default();
        let generator = build_generator(&config).unwrap();
        assert_eq!(generator.provider_name(), "gemini");
    }

    #[test]
    fn test_build_ollama() {
        let config = AiConfig {
            provider: AiProvider::Ollama,
            model: "llama3.2".to_string(),
            ..AiConfig::default()
        };
        let generator = build_generator(&config).unwrap();
        assert_eq!(generator.provider_name(), "ollama");
    }
}
