//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::application::handlers::{AnalysisRequest, RunAnalysisHandler};
use crate::domain::analysis::Scenario;
use crate::domain::catalog::{standard_catalog, OptionCatalog};

use super::dto::{
    AnalyzeRequest, AnalyzeResponse, HealthResponse, OptionsResponse, ScenarioDescriptor,
    ScenariosResponse,
};

/// Application state for analysis endpoints.
#[derive(Clone)]
pub struct AnalysisAppState {
    /// Catalog the analyses run against.
    pub catalog: Arc<OptionCatalog>,
}

impl AnalysisAppState {
    /// State backed by the built-in catalog.
    pub fn standard() -> Self {
        Self {
            catalog: Arc::new(standard_catalog().clone()),
        }
    }
}

/// Health check.
///
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// List the catalog options.
///
/// GET /api/analysis/options
pub async fn list_options(State(state): State<AnalysisAppState>) -> impl IntoResponse {
    Json(OptionsResponse {
        count: state.catalog.len(),
        options: state.catalog.iter().cloned().collect(),
    })
}

/// List the selectable what-if scenarios.
///
/// GET /api/analysis/scenarios
pub async fn list_scenarios() -> impl IntoResponse {
    Json(ScenariosResponse {
        scenarios: Scenario::all()
            .iter()
            .map(|s| ScenarioDescriptor {
                id: s.id().to_string(),
                title: s.title().to_string(),
            })
            .collect(),
    })
}

/// Run a full analysis.
///
/// POST /api/analysis
///
/// Malformed constraint values are rejected by the Json extractor before
/// this handler runs. An unknown scenario id does not fail the request;
/// the report carries a warning in its scenario section instead.
pub async fn run_analysis(
    State(state): State<AnalysisAppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let report = RunAnalysisHandler::handle_with_catalog(
        &AnalysisRequest {
            constraints: request.constraints,
            scenario: request.scenario,
        },
        &state.catalog,
    );
    info!(analysis_id = %report.analysis_id, "analysis served");

    let export_markdown = report.export_markdown();
    Json(AnalyzeResponse {
        report,
        export_markdown,
    })
}
