//! Situational profiles - named constraint patterns with tailored guidance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Budget, Consistency, ConstraintVector, DataComplexity, Performance, Scale, TeamSkill,
    TimeToMarket,
};

/// The profile matched for the current constraints, with its guidance lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationalProfile {
    pub name: String,
    pub guidance: Vec<String>,
}

struct ProfileRule {
    matches: fn(&ConstraintVector) -> bool,
    name: &'static str,
    guidance: &'static [&'static str],
}

/// Ordered, first-match-wins. The generic fallback below catches everything
/// the named profiles miss.
static PROFILE_RULES: &[ProfileRule] = &[
    ProfileRule {
        matches: |c| {
            c.budget == Budget::Low
                && c.team_skill == TeamSkill::Beginner
                && c.time_to_market == TimeToMarket::Urgent
        },
        name: "Cost-Conscious Startup",
        guidance: &[
            "MongoDB Atlas or DynamoDB align best with your constraints",
            "Both offer fast setup, managed operations, and scale when needed",
            "MongoDB provides more query flexibility; DynamoDB requires upfront access pattern design",
            "**Critical consideration:** MongoDB becomes expensive if queries aren't optimized",
            "**Critical consideration:** DynamoDB becomes expensive if you add many GSIs",
        ],
    },
    ProfileRule {
        matches: |c| {
            c.budget == Budget::High
                && c.scale == Scale::Massive
                && c.team_skill == TeamSkill::Expert
        },
        name: "Enterprise at Scale",
        guidance: &[
            "All options are viable - choose based on data model and access patterns",
            "PostgreSQL works if you can architect around single-master limitations",
            "DynamoDB handles unlimited scale but requires expert data modeling",
            "**Critical consideration:** Migration difficulty increases with scale - choose carefully",
            "**Critical consideration:** Multi-region complexity differs significantly across options",
        ],
    },
    ProfileRule {
        matches: |c| {
            c.data_complexity == DataComplexity::Complex && c.consistency == Consistency::Strong
        },
        name: "Transaction-Heavy Application",
        guidance: &[
            "PostgreSQL RDS aligns best with complex relational data and strong consistency",
            "ACID guarantees, JOINs, and constraints are native to PostgreSQL",
            "MongoDB and DynamoDB require architectural workarounds for complex transactions",
            "**Critical consideration:** PostgreSQL scaling limitations may require future sharding",
            "**Critical consideration:** Strong consistency across distributed databases adds latency",
        ],
    },
    ProfileRule {
        matches: |c| c.performance == Performance::Latency && c.scale == Scale::Small,
        name: "Low-Latency Application",
        guidance: &[
            "Redis ElastiCache provides the best latency but isn't a primary database",
            "Consider Redis + another database (PostgreSQL or DynamoDB) for architecture",
            "DynamoDB alone offers good latency at single-digit milliseconds",
            "**Critical consideration:** Redis requires persistence strategy for data durability",
            "**Critical consideration:** Two-database architecture increases complexity",
        ],
    },
];

static BALANCED_GUIDANCE: &[&str] = &[
    "No single option dominates - each brings different trade-offs",
    "PostgreSQL RDS: Best for complex queries, worse for write-heavy workloads",
    "DynamoDB: Best for scale and throughput, worse for complex queries",
    "MongoDB Atlas: Best for flexibility, worse for strict consistency",
    "Redis ElastiCache: Best for caching, not suitable as primary database",
];

impl SituationalProfile {
    /// Selects the first matching named profile, falling back to the generic
    /// "Balanced Requirements" profile.
    pub fn match_profile(constraints: &ConstraintVector) -> SituationalProfile {
        for rule in PROFILE_RULES {
            if (rule.matches)(constraints) {
                return SituationalProfile {
                    name: rule.name.to_string(),
                    guidance: rule.guidance.iter().map(|g| g.to_string()).collect(),
                };
            }
        }
        SituationalProfile {
            name: "Balanced Requirements".to_string(),
            guidance: BALANCED_GUIDANCE.iter().map(|g| g.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_conscious_startup_matches_the_startup_vector() {
        let constraints = ConstraintVector::new(
            Budget::Low,
            Performance::Latency,
            Scale::Small,
            TeamSkill::Beginner,
            TimeToMarket::Urgent,
            DataComplexity::Simple,
            Consistency::Eventual,
        );
        let profile = SituationalProfile::match_profile(&constraints);
        assert_eq!(profile.name, "Cost-Conscious Startup");
    }

    #[test]
    fn startup_profile_wins_over_later_low_latency_profile() {
        // The startup vector above also satisfies the Low-Latency profile
        // (latency + small); declared order decides.
        let constraints = ConstraintVector::new(
            Budget::Low,
            Performance::Latency,
            Scale::Small,
            TeamSkill::Beginner,
            TimeToMarket::Urgent,
            DataComplexity::Simple,
            Consistency::Eventual,
        );
        let profile = SituationalProfile::match_profile(&constraints);
        assert_ne!(profile.name, "Low-Latency Application");
    }

    #[test]
    fn transaction_heavy_profile_matches_complex_strong() {
        let constraints = ConstraintVector::new(
            Budget::Medium,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Expert,
            TimeToMarket::Flexible,
            DataComplexity::Complex,
            Consistency::Strong,
        );
        let profile = SituationalProfile::match_profile(&constraints);
        assert_eq!(profile.name, "Transaction-Heavy Application");
    }

    #[test]
    fn fallback_is_balanced_requirements() {
        let constraints = ConstraintVector::new(
            Budget::Medium,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Intermediate,
            TimeToMarket::Flexible,
            DataComplexity::Moderate,
            Consistency::Eventual,
        );
        let profile = SituationalProfile::match_profile(&constraints);
        assert_eq!(profile.name, "Balanced Requirements");
        assert_eq!(profile.guidance.len(), 5);
    }
}
