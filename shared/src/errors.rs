//! Error types for FitTrack Pro

use thiserror::Error;

/// Domain error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitTrackError {
    /// Non-positive or non-finite biometric input. No computation proceeds.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The text-generation service failed. Callers in the plan builder
    /// recover this locally with fallback text.
    #[error("External service error: {0}")]
    ExternalServiceFailure(String),

    #[error("Please select a timeframe greater than 0 weeks.")]
    ZeroTimeframe,
}

/// Result alias for domain operations
pub type FitTrackResult<T> = Result<T, FitTrackError>;
