//! Assembles the referee insight narrative from the alignment notes,
//! tensions, situational profile, and closing statement.

use crate::domain::catalog::OptionCatalog;
use crate::domain::evaluation::Evaluation;
use crate::domain::foundation::{
    Budget, ConstraintVector, DataComplexity, Performance, Scale, TeamSkill,
};
use crate::domain::insight::{SituationalProfile, TensionInsight};

/// Builds the markdown insight narrative. Deliberately never names a single
/// winning option; the closing statement hands the decision back to the
/// reader with a framework for making it.
pub struct InsightSynthesizer;

struct AlignmentNote {
    matches: fn(&ConstraintVector) -> bool,
    heading: &'static str,
    lines: &'static [&'static str],
}

/// Alignment notes in presentation order. At most one note fires per
/// dimension; balanced/intermediate values contribute nothing.
static ALIGNMENT_NOTES: &[AlignmentNote] = &[
    AlignmentNote {
        matches: |c| c.budget == Budget::Low,
        heading: "**Budget Considerations (Low Budget):**",
        lines: &[
            "- DynamoDB's usage-based pricing can be cost-effective for variable workloads, but watch for unexpected spikes with GSIs",
            "- PostgreSQL RDS has predictable costs but runs 24/7 even at low traffic",
            "- Redis ElastiCache memory costs add up quickly - only use for hot data",
        ],
    },
    AlignmentNote {
        matches: |c| c.budget == Budget::High,
        heading: "**Budget Considerations (High Budget):**",
        lines: &[
            "- All options are viable - focus on technical fit over cost",
            "- Consider reserved instances for RDS/ElastiCache for 40-60% savings",
            "- Budget allows for optimal configurations (Multi-AZ, read replicas, performance insights)",
        ],
    },
    AlignmentNote {
        matches: |c| c.scale == Scale::Massive,
        heading: "**Scale Considerations (Massive Scale):**",
        lines: &[
            "- DynamoDB and MongoDB Atlas are purpose-built for massive horizontal scaling",
            "- PostgreSQL RDS requires architectural workarounds (sharding, read replicas) at this scale",
            "- Redis ElastiCache works best for hot data caching, not primary storage at massive scale",
        ],
    },
    AlignmentNote {
        matches: |c| c.scale == Scale::Small,
        heading: "**Scale Considerations (Small Scale):**",
        lines: &[
            "- Any option works at small scale - prioritize ease of use and development speed",
            "- Avoid over-engineering - DynamoDB's auto-scaling may be overkill",
            "- Consider total operational burden over raw performance",
        ],
    },
    AlignmentNote {
        matches: |c| c.performance == Performance::Latency,
        heading: "**Performance Priority (Latency):**",
        lines: &[
            "- Redis ElastiCache provides sub-millisecond latency but requires architecture planning",
            "- DynamoDB offers single-digit millisecond latency with consistent performance",
            "- PostgreSQL and MongoDB have higher latency, especially under load",
        ],
    },
    AlignmentNote {
        matches: |c| c.performance == Performance::Throughput,
        heading: "**Performance Priority (Throughput):**",
        lines: &[
            "- DynamoDB excels at high write throughput with unlimited on-demand capacity",
            "- MongoDB Atlas handles high throughput through sharding",
            "- PostgreSQL RDS hits write bottlenecks due to single-master architecture",
        ],
    },
    AlignmentNote {
        matches: |c| c.team_skill == TeamSkill::Beginner,
        heading: "**Team Skill Considerations (Beginner):**",
        lines: &[
            "- DynamoDB and MongoDB have gentler learning curves and good documentation",
            "- PostgreSQL requires SQL expertise and query optimization knowledge",
            "- Redis requires understanding of caching strategies and eviction policies",
            "- Managed services reduce operational burden for all skill levels",
        ],
    },
    AlignmentNote {
        matches: |c| c.team_skill == TeamSkill::Expert,
        heading: "**Team Skill Considerations (Expert):**",
        lines: &[
            "- PostgreSQL rewards expertise with powerful features (advanced indexing, extensions, partitioning)",
            "- Your team can handle the complexity of any option and optimize for specific workloads",
            "- Consider whether simpler options might be limiting for advanced use cases",
        ],
    },
    AlignmentNote {
        matches: |c| c.data_complexity == DataComplexity::Complex,
        heading: "**Data Complexity (Complex):**",
        lines: &[
            "- PostgreSQL handles complex relationships, JOINs, and constraints natively",
            "- DynamoDB requires denormalization and application-side JOINs for complex queries",
            "- MongoDB can embed related data but struggles with many-to-many relationships",
        ],
    },
    AlignmentNote {
        matches: |c| c.data_complexity == DataComplexity::Simple,
        heading: "**Data Complexity (Simple):**",
        lines: &[
            "- DynamoDB is ideal for simple key-value patterns",
            "- PostgreSQL may be over-engineered for simple data models",
            "- Consider whether you're paying for features you won't use",
        ],
    },
];

static DECISION_QUESTIONS: &[&str] = &[
    "1. What failure mode am I LEAST willing to accept? (Cost overruns? Downtime? Slow queries?)",
    "2. Which complexity am I most prepared to handle? (SQL optimization? NoSQL data modeling? Caching strategies?)",
    "3. What might change in 12 months? (Team size? User scale? Feature complexity?)",
    "4. Where is migration difficulty acceptable? (Some choices are harder to migrate away from)",
];

impl InsightSynthesizer {
    /// Produces the full insight narrative for the given constraints.
    ///
    /// The evaluations and catalog are part of the report the narrative
    /// accompanies; the narrative itself is driven by the constraint vector
    /// so it stays stable across catalog customisations.
    pub fn synthesize(
        _evaluations: &[(String, Evaluation)],
        constraints: &ConstraintVector,
        _catalog: &OptionCatalog,
    ) -> String {
        let mut out: Vec<String> = Vec::new();

        out.push("## Constraint Alignment Analysis\n".to_string());
        for note in ALIGNMENT_NOTES {
            if (note.matches)(constraints) {
                out.push(note.heading.to_string());
                for line in note.lines {
                    out.push((*line).to_string());
                }
                out.push(String::new());
            }
        }

        out.push("---\n".to_string());
        out.push("## Critical Trade-Offs to Consider\n".to_string());
        for tension in TensionInsight::detect_all(constraints) {
            out.push(format!("**{}:**", tension.name));
            for line in &tension.lines {
                out.push(format!("- {line}"));
            }
            out.push(String::new());
        }

        out.push("---\n".to_string());
        out.push("## Situational Guidance\n".to_string());
        let profile = SituationalProfile::match_profile(constraints);
        out.push(format!("**Your Profile: {}**", profile.name));
        for line in &profile.guidance {
            out.push(format!("- {line}"));
        }
        out.push(String::new());

        out.push("---\n".to_string());
        out.push("## Final Referee Statement\n".to_string());
        out.push(
            "**We don't declare a winner because the 'best' choice depends on what you're willing to trade off.**\n"
                .to_string(),
        );
        out.push("**Ask yourself:**".to_string());
        for question in DECISION_QUESTIONS {
            out.push((*question).to_string());
        }
        out.push(String::new());
        out.push(
            "**Remember:** The right choice is one that aligns with your constraints AND your team's ability to manage the trade-offs. There's no perfect database - only trade-offs you can live with."
                .to_string(),
        );

        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::standard_catalog;
    use crate::domain::foundation::{Consistency, TimeToMarket};

    fn vector(
        budget: Budget,
        performance: Performance,
        scale: Scale,
        team_skill: TeamSkill,
        time_to_market: TimeToMarket,
        data_complexity: DataComplexity,
        consistency: Consistency,
    ) -> ConstraintVector {
        ConstraintVector::new(
            budget,
            performance,
            scale,
            team_skill,
            time_to_market,
            data_complexity,
            consistency,
        )
    }

    #[test]
    fn narrative_always_carries_the_four_sections() {
        let constraints = vector(
            Budget::Medium,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Intermediate,
            TimeToMarket::Flexible,
            DataComplexity::Moderate,
            Consistency::Eventual,
        );
        let narrative =
            InsightSynthesizer::synthesize(&[], &constraints, standard_catalog());
        assert!(narrative.contains("## Constraint Alignment Analysis"));
        assert!(narrative.contains("## Critical Trade-Offs to Consider"));
        assert!(narrative.contains("## Situational Guidance"));
        assert!(narrative.contains("## Final Referee Statement"));
    }

    #[test]
    fn narrative_never_crowns_a_winner() {
        let constraints = vector(
            Budget::Low,
            Performance::Latency,
            Scale::Massive,
            TeamSkill::Beginner,
            TimeToMarket::Urgent,
            DataComplexity::Complex,
            Consistency::Strong,
        );
        let narrative =
            InsightSynthesizer::synthesize(&[], &constraints, standard_catalog());
        assert!(narrative.contains("We don't declare a winner"));
        for crowning in ["recommended option", "the winner is", "best choice:"] {
            assert!(!narrative.to_lowercase().contains(crowning));
        }
    }

    #[test]
    fn balanced_vector_emits_no_alignment_notes() {
        let constraints = vector(
            Budget::Medium,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Intermediate,
            TimeToMarket::Flexible,
            DataComplexity::Moderate,
            Consistency::Eventual,
        );
        let narrative =
            InsightSynthesizer::synthesize(&[], &constraints, standard_catalog());
        assert!(!narrative.contains("**Budget Considerations"));
        assert!(!narrative.contains("**Scale Considerations"));
        assert!(!narrative.contains("**Performance Priority"));
    }

    #[test]
    fn extreme_vector_fires_all_tensions_in_the_narrative() {
        let constraints = vector(
            Budget::Low,
            Performance::Latency,
            Scale::Massive,
            TeamSkill::Beginner,
            TimeToMarket::Urgent,
            DataComplexity::Complex,
            Consistency::Strong,
        );
        let narrative =
            InsightSynthesizer::synthesize(&[], &constraints, standard_catalog());
        assert!(narrative.contains("**Budget vs Scale Tension:**"));
        assert!(narrative.contains("**Speed vs Complexity Tension:**"));
        assert!(narrative.contains("**Consistency vs Latency Tension:**"));
        assert!(narrative.contains("**Team Skill vs Scale Tension:**"));
    }
}
