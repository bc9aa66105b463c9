//! Scenario Analyzer - projections under predefined stress scenarios.
//!
//! Outcomes are catalog-static: precomputed literals keyed by (scenario,
//! option). The constraint vector is accepted for interface symmetry with the
//! other analyzers but never consulted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::{OptionCatalog, DYNAMODB, MONGODB, POSTGRES, REDIS};
use crate::domain::foundation::ConstraintVector;

/// The four predefined stress scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Traffic10x,
    TeamDoubles,
    BudgetCuts,
    LatencyCritical,
}

impl Scenario {
    /// Returns all scenarios in declaration order.
    pub fn all() -> &'static [Scenario] {
        &[
            Scenario::Traffic10x,
            Scenario::TeamDoubles,
            Scenario::BudgetCuts,
            Scenario::LatencyCritical,
        ]
    }

    /// Returns the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Scenario::Traffic10x => "traffic_10x",
            Scenario::TeamDoubles => "team_doubles",
            Scenario::BudgetCuts => "budget_cuts",
            Scenario::LatencyCritical => "latency_critical",
        }
    }

    /// Returns the display title.
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Traffic10x => "Traffic increases 10x",
            Scenario::TeamDoubles => "Team size doubles",
            Scenario::BudgetCuts => "Budget cuts 30%",
            Scenario::LatencyCritical => "Latency becomes critical",
        }
    }

    /// Parses a wire identifier; `None` for anything unknown.
    pub fn parse(id: &str) -> Option<Scenario> {
        Scenario::all().iter().copied().find(|s| s.id() == id)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Projected behavior of one option under a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub option: String,
    pub projection: String,
}

static TRAFFIC_10X: &[(&str, &str)] = &[
    (
        POSTGRES,
        "Struggles - Requires manual scaling, potential downtime for vertical scaling. Read \
         replicas help but write bottleneck remains.",
    ),
    (
        DYNAMODB,
        "Excels - Auto-scales seamlessly. Costs increase but performance remains consistent. \
         No intervention needed.",
    ),
    (
        MONGODB,
        "Handles Well - Auto-scaling enabled. May need shard rebalancing but generally \
         transparent. Some manual tuning beneficial.",
    ),
    (
        REDIS,
        "Depends - If used for caching, helps other databases handle spike. If primary store, \
         memory limits hit quickly. Manual scaling needed.",
    ),
];

static TEAM_DOUBLES: &[(&str, &str)] = &[
    (
        POSTGRES,
        "Better - More hands available for optimization, schema management. Team can leverage \
         PostgreSQL's advanced features effectively.",
    ),
    (
        DYNAMODB,
        "Neutral - Managed service benefit diminishes with larger team. Team may desire more \
         control that DynamoDB doesn't offer.",
    ),
    (
        MONGODB,
        "Better - Larger team can optimize queries, manage sharding. Flexibility becomes more \
         valuable with diverse use cases.",
    ),
    (
        REDIS,
        "Neutral - Additional expertise helps with cache strategies but operational complexity \
         remains manageable.",
    ),
];

static BUDGET_CUTS: &[(&str, &str)] = &[
    (
        POSTGRES,
        "Painful - Always-on costs can't be reduced easily. May need to downgrade instance \
         size, impacting performance. Reserved instances help but lock in costs.",
    ),
    (
        DYNAMODB,
        "Flexible - Can switch to on-demand or reduce provisioned capacity. Costs scale down \
         with usage. Most adaptable to budget cuts.",
    ),
    (
        MONGODB,
        "Moderate Pain - Can downgrade cluster but may impact performance. Watch for \
         unexpected costs from unoptimized queries under constraints.",
    ),
    (
        REDIS,
        "Difficult - Memory-intensive so hard to cut costs without removing functionality. May \
         need to reduce cache size or scope.",
    ),
];

static LATENCY_CRITICAL: &[(&str, &str)] = &[
    (
        POSTGRES,
        "Struggles - Typical latency 10-50ms under load. Optimization helps but can't match \
         in-memory solutions. Would need Redis caching layer.",
    ),
    (
        DYNAMODB,
        "Borderline - Single-digit milliseconds typical but may spike. DAX (DynamoDB \
         Accelerator) adds cost but provides microsecond latency.",
    ),
    (
        MONGODB,
        "Struggles - Similar to PostgreSQL, typically 10-50ms. Would need caching layer or \
         architectural changes to meet <50ms consistently.",
    ),
    (
        REDIS,
        "Excels - Sub-millisecond latency is Redis's strength. Perfect for latency-critical \
         operations but remember it's a cache, not primary DB.",
    ),
];

/// Neutral line for catalog options with no precomputed literal.
const NO_PROJECTION: &str =
    "No scenario projection available - outcome depends on this option's specific scaling and \
     cost profile.";

/// Projects each catalog option's behavior under a stress scenario.
pub struct ScenarioAnalyzer;

impl ScenarioAnalyzer {
    /// Projects a scenario given by wire identifier.
    ///
    /// Unknown identifiers return an empty mapping, never an error; callers
    /// treat an empty mapping as "no projection available". Known identifiers
    /// return one outcome per catalog option, in catalog order.
    pub fn analyze(
        scenario_id: &str,
        constraints: &ConstraintVector,
        catalog: &OptionCatalog,
    ) -> Vec<ScenarioOutcome> {
        match Scenario::parse(scenario_id) {
            Some(scenario) => Self::project(scenario, constraints, catalog),
            None => Vec::new(),
        }
    }

    /// Projects a known scenario over the catalog.
    pub fn project(
        scenario: Scenario,
        _constraints: &ConstraintVector,
        catalog: &OptionCatalog,
    ) -> Vec<ScenarioOutcome> {
        let outcomes = Self::outcome_table(scenario);
        catalog
            .names()
            .map(|name| ScenarioOutcome {
                option: name.to_string(),
                projection: outcomes
                    .iter()
                    .find(|(option, _)| *option == name)
                    .map(|(_, projection)| *projection)
                    .unwrap_or(NO_PROJECTION)
                    .to_string(),
            })
            .collect()
    }

    fn outcome_table(scenario: Scenario) -> &'static [(&'static str, &'static str)] {
        match scenario {
            Scenario::Traffic10x => TRAFFIC_10X,
            Scenario::TeamDoubles => TEAM_DOUBLES,
            Scenario::BudgetCuts => BUDGET_CUTS,
            Scenario::LatencyCritical => LATENCY_CRITICAL,
        }
    }
}
