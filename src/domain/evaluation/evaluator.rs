//! Trade-off Evaluator - the accumulating rule engine at the heart of the advisor.

use crate::domain::catalog::OptionProfile;
use crate::domain::foundation::ConstraintVector;

use super::rules::{dimension_banks, general_bank};
use super::Evaluation;

/// Evaluates one option profile against the constraint vector.
///
/// This is an accumulate-all engine: every rule whose predicate matches
/// fires, in bank order, dimension banks first (canonical order) and the
/// option-identity general bank last. Identical input always yields
/// byte-identical output in the same order.
///
/// An option name unknown to every option-specific rule is not an error; it
/// still collects whatever fires on its generic attributes (pricing model,
/// setup time, and so on).
pub struct TradeoffEvaluator;

impl TradeoffEvaluator {
    /// Produces the categorized observations for one option.
    pub fn evaluate(profile: &OptionProfile, constraints: &ConstraintVector) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for (_dimension, bank) in dimension_banks() {
            for rule in bank.iter() {
                if rule.fires(constraints, profile) {
                    evaluation.push(rule.category, rule.text);
                }
            }
        }

        for rule in general_bank() {
            if rule.fires(constraints, profile) {
                evaluation.push(rule.category, rule.text);
            }
        }

        evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{
        standard_catalog, BaseComplexity, Category as OptionCategory, ConsistencyModel,
        PricingModel, ScalingModel, SetupTime, DYNAMODB, POSTGRES, REDIS,
    };
    use crate::domain::foundation::{
        Budget, Consistency, DataComplexity, Performance, Scale, TeamSkill, TimeToMarket,
    };

    fn startup_vector() -> ConstraintVector {
        ConstraintVector::new(
            Budget::Low,
            Performance::Latency,
            Scale::Small,
            TeamSkill::Beginner,
            TimeToMarket::Urgent,
            DataComplexity::Simple,
            Consistency::Eventual,
        )
    }

    fn enterprise_vector() -> ConstraintVector {
        ConstraintVector::new(
            Budget::High,
            Performance::Throughput,
            Scale::Massive,
            TeamSkill::Expert,
            TimeToMarket::Flexible,
            DataComplexity::Complex,
            Consistency::Strong,
        )
    }

    #[test]
    fn dynamodb_under_startup_constraints_collects_expected_strengths() {
        let profile = standard_catalog().get(DYNAMODB).unwrap();
        let evaluation = TradeoffEvaluator::evaluate(profile, &startup_vector());

        assert!(evaluation
            .strengths
            .contains(&"Pay only for what you use - great for variable workloads".to_string()));
        assert!(evaluation
            .strengths
            .contains(&"Single-digit millisecond latency at any scale".to_string()));
        assert!(evaluation
            .strengths
            .contains(&"Eventual consistency mode offers lower latency and higher throughput".to_string()));
        // Small scale still warns against auto-scaling overkill
        assert!(evaluation.avoid_when.contains(
            &"Your data access patterns are simple and cost matters more than auto-scaling"
                .to_string()
        ));
    }

    #[test]
    fn postgres_under_enterprise_constraints_mixes_strengths_and_scale_limits() {
        let profile = standard_catalog().get(POSTGRES).unwrap();
        let evaluation = TradeoffEvaluator::evaluate(profile, &enterprise_vector());

        assert!(evaluation
            .strengths
            .contains(&"JOINs, constraints, and transactions handle complex relationships well".to_string()));
        assert!(evaluation
            .limitations
            .contains(&"Write throughput limited by single-master architecture".to_string()));
        assert!(evaluation
            .limitations
            .contains(&"Vertical scaling has limits - eventual need for sharding or read replicas".to_string()));
        assert!(evaluation
            .hidden_costs
            .contains(&"Read replica lag and synchronization complexity at scale".to_string()));
    }

    #[test]
    fn dimension_observations_precede_general_observations() {
        let profile = standard_catalog().get(REDIS).unwrap();
        let evaluation = TradeoffEvaluator::evaluate(profile, &startup_vector());

        // The Redis general strength is appended after all dimension banks.
        let last = evaluation.strengths.last().unwrap();
        assert_eq!(last, "Ideal for session storage, rate limiting, and leaderboards");
    }

    #[test]
    fn evaluation_is_deterministic() {
        let profile = standard_catalog().get(POSTGRES).unwrap();
        let constraints = enterprise_vector();
        let a = TradeoffEvaluator::evaluate(profile, &constraints);
        let b = TradeoffEvaluator::evaluate(profile, &constraints);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn unknown_option_still_receives_generic_attribute_observations() {
        let profile = crate::domain::catalog::OptionProfile {
            name: "CockroachDB".to_string(),
            description: "Distributed SQL database".to_string(),
            category: OptionCategory::Relational,
            managed: true,
            base_complexity: BaseComplexity::Expert,
            pricing_model: PricingModel::UsageBased,
            scaling_model: ScalingModel::Horizontal,
            setup_time: SetupTime::Fast,
            consistency: ConsistencyModel::Strong,
            good_for: vec![],
            challenges: vec![],
        };
        let evaluation = TradeoffEvaluator::evaluate(&profile, &startup_vector());

        // Generic rules fire on attributes even though no identity rule knows it.
        assert!(evaluation
            .strengths
            .contains(&"Pay only for what you use - great for variable workloads".to_string()));
        assert!(evaluation
            .strengths
            .contains(&"Quick to set up - perfect for small scale".to_string()));
        assert!(evaluation
            .limitations
            .contains(&"Requires database expertise for optimization and troubleshooting".to_string()));
    }
}
