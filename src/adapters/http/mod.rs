//! HTTP adapters - REST API implementations.

pub mod analysis;

pub use analysis::{analysis_router, AnalysisAppState};
