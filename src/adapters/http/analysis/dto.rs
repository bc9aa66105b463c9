//! Data transfer objects for analysis HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::AnalysisReport;
use crate::domain::catalog::OptionProfile;
use crate::domain::foundation::ConstraintVector;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to run a full analysis.
///
/// Serde rejects malformed constraint values before the engine ever sees
/// them; the vector is valid by the time it deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The seven constraint values.
    pub constraints: ConstraintVector,
    /// Optional what-if scenario identifier.
    #[serde(default)]
    pub scenario: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Full analysis response: the report plus its markdown export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    /// The downloadable decision summary.
    pub export_markdown: String,
}

/// Catalog listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub count: usize,
    pub options: Vec<OptionProfile>,
}

/// One selectable what-if scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDescriptor {
    /// Wire identifier, e.g. `traffic_10x`.
    pub id: String,
    /// Human-readable title.
    pub title: String,
}

/// Scenario listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenariosResponse {
    pub scenarios: Vec<ScenarioDescriptor>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
