//! Sensitivity Analyzer - which constraint dimensions drive the decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Budget, Consistency, ConstraintVector, DataComplexity, Dimension, Impact, Performance, Scale,
    TeamSkill, TimeToMarket,
};

/// Impact verdict for one constraint dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityEntry {
    pub dimension: Dimension,
    pub impact: Impact,
    pub explanation: String,
}

/// Fully populated sensitivity map: exactly one entry per dimension, in
/// canonical dimension order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensitivityMap {
    entries: Vec<SensitivityEntry>,
}

impl SensitivityMap {
    /// Returns the entries in canonical dimension order.
    pub fn entries(&self) -> &[SensitivityEntry] {
        &self.entries
    }

    /// Looks up the entry for one dimension. Always present.
    pub fn get(&self, dimension: Dimension) -> &SensitivityEntry {
        self.entries
            .iter()
            .find(|e| e.dimension == dimension)
            .expect("sensitivity map is total over dimensions")
    }

    /// Returns entries ranked HIGH first; ties keep canonical order.
    pub fn ranked_by_impact(&self) -> Vec<&SensitivityEntry> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by_key(|e| e.impact.rank());
        ranked
    }
}

/// Computes the sensitivity map from the constraint vector alone; this
/// analyzer never consults the option catalog.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Produces the total sensitivity map for the vector.
    pub fn analyze(constraints: &ConstraintVector) -> SensitivityMap {
        let entries = Dimension::all()
            .iter()
            .map(|dimension| {
                let (impact, explanation) = Self::assess(*dimension, constraints);
                SensitivityEntry {
                    dimension: *dimension,
                    impact,
                    explanation: explanation.to_string(),
                }
            })
            .collect();
        SensitivityMap { entries }
    }

    /// Per-dimension decision table. Every arm has a default branch so the
    /// map is total for any valid vector.
    fn assess(dimension: Dimension, c: &ConstraintVector) -> (Impact, &'static str) {
        match dimension {
            Dimension::Budget => match c.budget {
                Budget::Low => (
                    Impact::High,
                    "Low budget significantly limits options - usage-based pricing becomes critical",
                ),
                _ => (
                    Impact::Medium,
                    "Budget allows flexibility - focus on technical fit over cost",
                ),
            },
            Dimension::PerformancePriority => match c.performance {
                Performance::Latency => (
                    Impact::High,
                    "Latency requirements strongly favor in-memory or low-latency options",
                ),
                _ => (
                    Impact::Medium,
                    "Performance needs are flexible - most options can work",
                ),
            },
            Dimension::Scale => match c.scale {
                Scale::Massive => (
                    Impact::High,
                    "Massive scale eliminates options without proven horizontal scaling",
                ),
                Scale::Small => (
                    Impact::Low,
                    "All options work at small scale - prioritize other factors",
                ),
                Scale::Medium => (
                    Impact::Medium,
                    "Medium scale requires careful capacity planning",
                ),
            },
            Dimension::TeamSkill => match c.team_skill {
                TeamSkill::Beginner => (
                    Impact::High,
                    "Beginner team needs managed services with low operational complexity",
                ),
                _ => (
                    Impact::Low,
                    "Experienced team can handle complexity - focus on technical requirements",
                ),
            },
            Dimension::TimeToMarket => match c.time_to_market {
                TimeToMarket::Urgent => (
                    Impact::Medium,
                    "Urgency favors fast setup but shouldn't override technical fit",
                ),
                TimeToMarket::Flexible => (
                    Impact::Low,
                    "Flexible timeline allows proper evaluation - prioritize long-term fit",
                ),
            },
            Dimension::DataComplexity => match c.data_complexity {
                DataComplexity::Complex => (
                    Impact::High,
                    "Complex data model strongly favors relational databases with JOIN support",
                ),
                _ => (
                    Impact::Medium,
                    "Simple data model offers flexibility across database types",
                ),
            },
            Dimension::Consistency => match c.consistency {
                Consistency::Strong => (
                    Impact::High,
                    "Strong consistency requirement eliminates eventually-consistent options",
                ),
                Consistency::Eventual => (
                    Impact::Low,
                    "Eventual consistency acceptable - opens up high-performance options",
                ),
            },
        }
    }
}
