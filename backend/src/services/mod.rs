//! Business logic services
//!
//! Services sit between the route handlers and external systems: the
//! text generator for plans and the PDF renderer for exports.

pub mod export;
pub mod llm;
pub mod pdf;
pub mod plans;

pub use export::ExportService;
pub use plans::{PlanRequest, PlanService};
