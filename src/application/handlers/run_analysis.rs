//! RunAnalysisHandler - orchestrates one full analysis pass.
//!
//! Runs every analyzer over the catalog for a constraint vector and
//! assembles the result into a single report:
//! - per-option trade-off evaluation and fit assessment
//! - constraint sensitivity map
//! - cross-option comparisons
//! - optional what-if scenario projection
//! - synthesized referee insight narrative

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::analysis::{
    Comparison, CrossOptionComparator, FitAssessment, FitAssessor, Scenario, ScenarioAnalyzer,
    ScenarioOutcome, SensitivityAnalyzer, SensitivityMap,
};
use crate::domain::catalog::{standard_catalog, OptionCatalog};
use crate::domain::evaluation::{Category, Evaluation, TradeoffEvaluator};
use crate::domain::foundation::ConstraintVector;
use crate::domain::insight::InsightSynthesizer;

/// Background assumptions every analysis is made under. Fixed data,
/// surfaced on the report so readers can check them against their context.
pub static ANALYSIS_ASSUMPTIONS: &[&str] = &[
    "All options are managed/cloud services",
    "Standard AWS pricing without heavy discounts",
    "No existing infrastructure lock-in",
    "Team can learn new technologies with time",
    "Data sovereignty is not a constraint",
];

/// An analysis request: the constraint vector plus an optional what-if
/// scenario identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub constraints: ConstraintVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
}

/// Everything the engine has to say about one catalog option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionAnalysis {
    pub option: String,
    pub description: String,
    pub evaluation: Evaluation,
    pub fit: FitAssessment,
}

/// Scenario projection attached to a report when a scenario was requested.
///
/// An unrecognized identifier yields empty outcomes plus a warning instead
/// of failing the whole analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub scenario: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub outcomes: Vec<ScenarioOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The assembled analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub constraints: ConstraintVector,
    pub options: Vec<OptionAnalysis>,
    pub sensitivity: SensitivityMap,
    pub comparisons: Vec<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioProjection>,
    pub insight: String,
    pub assumptions: Vec<String>,
}

impl AnalysisReport {
    /// Renders the downloadable decision summary: header, constraint
    /// values, per-option trade-offs under their category headings,
    /// sensitivity ranking (highest impact first), and the full insight
    /// narrative.
    pub fn export_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# Database Decision Analysis\n");
        out.push_str(&format!(
            "**Generated:** {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.push_str("## Constraints\n");
        for (dimension, value) in self.constraints.literal_values() {
            out.push_str(&format!("- **{}:** {}\n", dimension.display_name(), value));
        }

        out.push_str("\n## Option Trade-offs\n");
        for option in &self.options {
            out.push_str(&format!(
                "\n### {} ({})\n",
                option.option,
                option.fit.tier.label()
            ));
            for category in Category::all() {
                let observations = option.evaluation.category(*category);
                if observations.is_empty() {
                    continue;
                }
                out.push_str(&format!("**{}**\n", category.heading()));
                for line in observations {
                    out.push_str(&format!("- {line}\n"));
                }
            }
        }

        out.push_str("\n## Constraint Sensitivity\n");
        for entry in self.sensitivity.ranked_by_impact() {
            out.push_str(&format!(
                "- **{} ({}):** {}\n",
                entry.dimension.display_name(),
                entry.impact.label(),
                entry.explanation
            ));
        }

        out.push_str(&format!("\n## Referee Insight\n{}\n", self.insight));
        out
    }
}

/// Runs the full analysis pipeline. Stateless; every call is independent.
pub struct RunAnalysisHandler;

impl RunAnalysisHandler {
    /// Analyzes against the standard catalog.
    pub fn handle(request: &AnalysisRequest) -> AnalysisReport {
        Self::handle_with_catalog(request, standard_catalog())
    }

    /// Analyzes against a caller-supplied catalog.
    pub fn handle_with_catalog(
        request: &AnalysisRequest,
        catalog: &OptionCatalog,
    ) -> AnalysisReport {
        let constraints = request.constraints;
        let analysis_id = Uuid::new_v4();
        debug!(%analysis_id, "running analysis");

        let mut evaluations: Vec<(String, Evaluation)> = Vec::with_capacity(catalog.len());
        let mut options: Vec<OptionAnalysis> = Vec::with_capacity(catalog.len());
        for profile in catalog.iter() {
            let evaluation = TradeoffEvaluator::evaluate(profile, &constraints);
            let fit = FitAssessor::assess(&profile.name, &constraints);
            evaluations.push((profile.name.clone(), evaluation.clone()));
            options.push(OptionAnalysis {
                option: profile.name.clone(),
                description: profile.description.clone(),
                evaluation,
                fit,
            });
        }

        let sensitivity = SensitivityAnalyzer::analyze(&constraints);
        let comparisons = CrossOptionComparator::compare(&constraints);
        let scenario = request
            .scenario
            .as_deref()
            .map(|id| Self::project_scenario(id, &constraints, catalog));
        let insight = InsightSynthesizer::synthesize(&evaluations, &constraints, catalog);

        debug!(
            %analysis_id,
            options = options.len(),
            comparisons = comparisons.len(),
            "analysis assembled"
        );

        AnalysisReport {
            analysis_id,
            generated_at: Utc::now(),
            constraints,
            options,
            sensitivity,
            comparisons,
            scenario,
            insight,
            assumptions: ANALYSIS_ASSUMPTIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn project_scenario(
        scenario_id: &str,
        constraints: &ConstraintVector,
        catalog: &OptionCatalog,
    ) -> ScenarioProjection {
        match Scenario::parse(scenario_id) {
            Some(scenario) => ScenarioProjection {
                scenario: scenario_id.to_string(),
                title: Some(scenario.title().to_string()),
                outcomes: ScenarioAnalyzer::project(scenario, constraints, catalog),
                warning: None,
            },
            None => {
                debug!(scenario_id, "unknown scenario requested");
                ScenarioProjection {
                    scenario: scenario_id.to_string(),
                    title: None,
                    outcomes: Vec::new(),
                    warning: Some(
                        "Scenario analysis unavailable for selected combination.".to_string(),
                    ),
                }
            }
        }
    }
}
