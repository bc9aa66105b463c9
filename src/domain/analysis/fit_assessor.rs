//! Fit Assessor - first-match-wins suitability classification per option.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{DYNAMODB, MONGODB, POSTGRES, REDIS};
use crate::domain::foundation::{
    Budget, ConstraintVector, DataComplexity, FitTier, Performance, Scale, TeamSkill, TimeToMarket,
};

/// Suitability verdict for one option under the current constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitAssessment {
    pub tier: FitTier,
    /// Why this fit tier was assigned.
    pub reasoning: String,
    /// Conditions under which the assigned tier degrades; empty when no
    /// degradation condition is defined for the matched branch.
    pub context_warning: String,
}

impl FitAssessment {
    /// Creates an assessment.
    pub fn new(
        tier: FitTier,
        reasoning: impl Into<String>,
        context_warning: impl Into<String>,
    ) -> Self {
        Self {
            tier,
            reasoning: reasoning.into(),
            context_warning: context_warning.into(),
        }
    }

    /// Sentinel returned for option names with no rule bank.
    ///
    /// A deliberate total-function fallback, never an error.
    pub fn pending() -> Self {
        Self::new(FitTier::ModerateFit, "Evaluation pending", "")
    }

    /// Returns true if a degradation warning is present.
    pub fn has_context_warning(&self) -> bool {
        !self.context_warning.is_empty()
    }
}

/// One condition in an option's ordered decision list.
struct FitRule {
    matches: fn(&ConstraintVector) -> bool,
    tier: FitTier,
    reasoning: &'static str,
    context_warning: &'static str,
}

/// Ordered decision list for one option: strong-fit conditions first, then
/// risky-fit conditions, then the option's moderate default. first-match-wins,
/// unlike the accumulating evaluator.
struct DecisionList {
    rules: &'static [FitRule],
    default_reasoning: &'static str,
    default_warning: &'static str,
}

impl DecisionList {
    fn decide(&self, constraints: &ConstraintVector) -> FitAssessment {
        for rule in self.rules {
            if (rule.matches)(constraints) {
                return FitAssessment::new(rule.tier, rule.reasoning, rule.context_warning);
            }
        }
        FitAssessment::new(
            FitTier::ModerateFit,
            self.default_reasoning,
            self.default_warning,
        )
    }
}

static POSTGRES_FIT: DecisionList = DecisionList {
    rules: &[
        FitRule {
            matches: |c| {
                c.data_complexity == DataComplexity::Complex
                    && c.consistency == crate::domain::foundation::Consistency::Strong
                    && matches!(c.team_skill, TeamSkill::Intermediate | TeamSkill::Expert)
            },
            tier: FitTier::StrongFit,
            reasoning: "Excellent match for complex relational data with strong consistency needs",
            context_warning: "Fit degrades if traffic scales beyond single-master capacity",
        },
        FitRule {
            matches: |c| c.budget == Budget::Low && c.scale == Scale::Massive,
            tier: FitTier::RiskyFit,
            reasoning: "Expensive at massive scale with always-on costs",
            context_warning: "Cost escalates quickly with Multi-AZ and read replicas",
        },
        FitRule {
            matches: |c| c.team_skill == TeamSkill::Beginner,
            tier: FitTier::RiskyFit,
            reasoning: "Requires SQL expertise and query optimization knowledge",
            context_warning: "Team may struggle with schema migrations and performance tuning",
        },
    ],
    default_reasoning: "Solid general-purpose choice with proven reliability",
    default_warning: "Watch for scaling challenges beyond 100K concurrent connections",
};

static DYNAMODB_FIT: DecisionList = DecisionList {
    rules: &[
        FitRule {
            matches: |c| {
                c.scale == Scale::Massive
                    && c.data_complexity == DataComplexity::Simple
                    && matches!(c.performance, Performance::Latency | Performance::Throughput)
            },
            tier: FitTier::StrongFit,
            reasoning: "Purpose-built for massive scale with simple access patterns",
            context_warning: "Fit degrades if query patterns become complex or unpredictable",
        },
        FitRule {
            matches: |c| c.budget == Budget::Low && c.scale == Scale::Small,
            tier: FitTier::StrongFit,
            reasoning: "Free tier covers small workloads with pay-per-use pricing",
            context_warning: "Watch costs if you add multiple GSIs",
        },
        FitRule {
            matches: |c| c.data_complexity == DataComplexity::Complex,
            tier: FitTier::RiskyFit,
            reasoning: "Complex queries require denormalization and application-side joins",
            context_warning: "Data model changes are expensive once in production",
        },
    ],
    default_reasoning: "Versatile NoSQL option with excellent scaling characteristics",
    default_warning: "Costs can spike unexpectedly with poor access pattern design",
};

static MONGODB_FIT: DecisionList = DecisionList {
    rules: &[
        FitRule {
            matches: |c| {
                c.time_to_market == TimeToMarket::Urgent
                    && matches!(
                        c.data_complexity,
                        DataComplexity::Simple | DataComplexity::Moderate
                    )
                    && c.team_skill == TeamSkill::Beginner
            },
            tier: FitTier::StrongFit,
            reasoning: "Flexible schema enables rapid iteration with gentle learning curve",
            context_warning:
                "Fit degrades if strict consistency or complex transactions become critical",
        },
        FitRule {
            matches: |c| c.budget == Budget::Low && c.team_skill == TeamSkill::Beginner,
            tier: FitTier::RiskyFit,
            reasoning: "Costs escalate quickly with poor query patterns and indexing",
            context_warning: "Requires expertise to avoid expensive memory spikes",
        },
    ],
    default_reasoning: "Good balance of flexibility and query capability",
    default_warning: "Transaction performance degrades across shards",
};

static REDIS_FIT: DecisionList = DecisionList {
    rules: &[
        FitRule {
            matches: |c| {
                c.performance == Performance::Latency
                    && matches!(c.scale, Scale::Small | Scale::Medium)
            },
            tier: FitTier::StrongFit,
            reasoning: "Sub-millisecond latency perfect for caching and session storage",
            context_warning: "NOT suitable as primary database - requires persistence strategy",
        },
        FitRule {
            matches: |c| c.scale == Scale::Massive,
            tier: FitTier::RiskyFit,
            reasoning: "Memory costs become prohibitive at massive dataset sizes",
            context_warning: "Best for hot data caching, not primary storage at scale",
        },
    ],
    default_reasoning: "Excellent complement to other databases for performance boost",
    default_warning: "Requires careful data eviction and persistence configuration",
};

/// Classifies each option's overall suitability into a discrete tier.
pub struct FitAssessor;

impl FitAssessor {
    /// Assesses one option by name. Unknown names fall through to the
    /// pending sentinel.
    pub fn assess(option_name: &str, constraints: &ConstraintVector) -> FitAssessment {
        let list = match option_name {
            POSTGRES => &POSTGRES_FIT,
            DYNAMODB => &DYNAMODB_FIT,
            MONGODB => &MONGODB_FIT,
            REDIS => &REDIS_FIT,
            _ => return FitAssessment::pending(),
        };
        list.decide(constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Consistency;

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
    fn dynamodb_free_tier_branch_on_low_budget_small_scale() {
        let constraints = vector(
            Budget::Low,
            Performance::Latency,
            Scale::Small,
            TeamSkill::Beginner,
            TimeToMarket::Urgent,
            DataComplexity::Simple,
            Consistency::Eventual,
        );
        let assessment = FitAssessor::assess(DYNAMODB, &constraints);
        assert_eq!(assessment.tier, FitTier::StrongFit);
        assert!(assessment.reasoning.contains("Free tier"));
    }

    #[test]
    fn dynamodb_massive_simple_branch_wins_over_free_tier_branch() {
        // Both strong-fit conditions could never overlap (small vs massive),
        // but declared order still decides which reasoning is reported.
        let constraints = vector(
            Budget::Low,
            Performance::Throughput,
            Scale::Massive,
            TeamSkill::Expert,
            TimeToMarket::Flexible,
            DataComplexity::Simple,
            Consistency::Eventual,
        );
        let assessment = FitAssessor::assess(DYNAMODB, &constraints);
        assert_eq!(assessment.tier, FitTier::StrongFit);
        assert!(assessment.reasoning.contains("Purpose-built"));
    }

    #[test]
    fn postgres_strong_fit_requires_skill_above_beginner() {
        let strong = vector(
            Budget::Medium,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Expert,
            TimeToMarket::Flexible,
            DataComplexity::Complex,
            Consistency::Strong,
        );
        assert_eq!(FitAssessor::assess(POSTGRES, &strong).tier, FitTier::StrongFit);

        let beginner = vector(
            Budget::Medium,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Beginner,
            TimeToMarket::Flexible,
            DataComplexity::Complex,
            Consistency::Strong,
        );
        let assessment = FitAssessor::assess(POSTGRES, &beginner);
        assert_eq!(assessment.tier, FitTier::RiskyFit);
        assert!(assessment.reasoning.contains("SQL expertise"));
    }

    #[test]
    fn postgres_risky_branches_respect_declared_order() {
        // Low budget + massive scale + beginner team: the cost branch is
        // declared before the skill branch and must win.
        let constraints = vector(
            Budget::Low,
            Performance::Balanced,
            Scale::Massive,
            TeamSkill::Beginner,
            TimeToMarket::Urgent,
            DataComplexity::Moderate,
            Consistency::Strong,
        );
        let assessment = FitAssessor::assess(POSTGRES, &constraints);
        assert_eq!(assessment.tier, FitTier::RiskyFit);
        assert!(assessment.reasoning.contains("massive scale"));
    }

    #[test]
    fn redis_latency_small_scale_is_strong_fit_with_warning() {
        let constraints = vector(
            Budget::Medium,
            Performance::Latency,
            Scale::Small,
            TeamSkill::Intermediate,
            TimeToMarket::Flexible,
            DataComplexity::Simple,
            Consistency::Eventual,
        );
        let assessment = FitAssessor::assess(REDIS, &constraints);
        assert_eq!(assessment.tier, FitTier::StrongFit);
        assert!(assessment.has_context_warning());
    }

    #[test]
    fn mongodb_defaults_to_moderate() {
        let constraints = vector(
            Budget::High,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Expert,
            TimeToMarket::Flexible,
            DataComplexity::Complex,
            Consistency::Strong,
        );
        let assessment = FitAssessor::assess(MONGODB, &constraints);
        assert_eq!(assessment.tier, FitTier::ModerateFit);
        assert!(assessment.reasoning.contains("flexibility"));
    }

    #[test]
    fn unknown_option_returns_pending_sentinel() {
        let constraints = vector(
            Budget::Medium,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Intermediate,
            TimeToMarket::Flexible,
            DataComplexity::Moderate,
            Consistency::Strong,
        );
        let assessment = FitAssessor::assess("FoundationDB", &constraints);
        assert_eq!(assessment.tier, FitTier::ModerateFit);
        assert_eq!(assessment.reasoning, "Evaluation pending");
        assert_eq!(assessment.context_warning, "");
    }
}
