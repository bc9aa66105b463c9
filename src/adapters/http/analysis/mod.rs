//! Analysis HTTP adapter - REST API over the analysis engine.
//!
//! Thin collaborator: every decision lives in the domain layer; handlers
//! only translate between DTOs and the application handler.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::AnalysisAppState;
pub use routes::analysis_router;
