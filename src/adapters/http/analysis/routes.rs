//! Axum router configuration for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health_check, list_options, list_scenarios, run_analysis, AnalysisAppState};

/// Create the analysis API router.
///
/// # Routes
///
/// - `GET /health` - Service health check
/// - `GET /api/analysis/options` - List the option catalog
/// - `GET /api/analysis/scenarios` - List selectable what-if scenarios
/// - `POST /api/analysis` - Run a full analysis for a constraint vector
pub fn analysis_router() -> Router<AnalysisAppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/analysis/options", get(list_options))
        .route("/api/analysis/scenarios", get(list_scenarios))
        .route("/api/analysis", post(run_analysis))
}
