//! FitTrack Pro Shared Library
//!
//! This crate contains the domain types, health metric calculations and
//! validation used by the backend and WASM modules. Nothing in it performs
//! I/O.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod progress;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use progress::*;
pub use units::*;
