//! Tension detection - conjunctions of constraints that pull in opposite directions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Budget, Consistency, ConstraintVector, DataComplexity, Performance, Scale, TeamSkill,
    TimeToMarket,
};

/// A detected tension: two or more constraint values creating conflicting
/// pressure on the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensionInsight {
    pub name: String,
    pub lines: Vec<String>,
}

struct TensionRule {
    fires: fn(&ConstraintVector) -> bool,
    name: &'static str,
    lines: &'static [&'static str],
}

/// Each tension is gated independently; zero, one, or several may fire.
static TENSION_RULES: &[TensionRule] = &[
    TensionRule {
        fires: |c| c.budget == Budget::Low && c.scale == Scale::Massive,
        name: "Budget vs Scale Tension",
        lines: &[
            "Massive scale on low budget is challenging",
            "DynamoDB's auto-scaling can get expensive fast",
            "Consider PostgreSQL with careful capacity planning, but expect manual scaling work",
        ],
    },
    TensionRule {
        fires: |c| {
            c.time_to_market == TimeToMarket::Urgent
                && c.data_complexity == DataComplexity::Complex
        },
        name: "Speed vs Complexity Tension",
        lines: &[
            "Complex data models take time to design properly",
            "MongoDB's flexible schema enables faster iteration but may cause consistency issues later",
            "PostgreSQL forces upfront design but reduces refactoring pain",
        ],
    },
    TensionRule {
        fires: |c| {
            c.consistency == Consistency::Strong && c.performance == Performance::Latency
        },
        name: "Consistency vs Latency Tension",
        lines: &[
            "Strong consistency adds latency due to coordination overhead",
            "DynamoDB's strongly consistent reads are slower than eventually consistent",
            "Consider if eventual consistency is acceptable for your use case",
        ],
    },
    TensionRule {
        fires: |c| c.team_skill == TeamSkill::Beginner && c.scale == Scale::Massive,
        name: "Team Skill vs Scale Tension",
        lines: &[
            "Massive scale systems are inherently complex",
            "Managed services (DynamoDB, MongoDB Atlas) reduce operational burden",
            "Budget for training or senior database expertise as you scale",
        ],
    },
];

impl TensionInsight {
    /// Detects all firing tensions, declaration order.
    pub fn detect_all(constraints: &ConstraintVector) -> Vec<TensionInsight> {
        TENSION_RULES
            .iter()
            .filter(|rule| (rule.fires)(constraints))
            .map(|rule| TensionInsight {
                name: rule.name.to_string(),
                lines: rule.lines.iter().map(|l| l.to_string()).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_vector() -> ConstraintVector {
        ConstraintVector::new(
            Budget::Medium,
            Performance::Balanced,
            Scale::Medium,
            TeamSkill::Intermediate,
            TimeToMarket::Flexible,
            DataComplexity::Moderate,
            Consistency::Eventual,
        )
    }

    #[test]
    fn no_tensions_fire_for_a_relaxed_vector() {
        assert!(TensionInsight::detect_all(&base_vector()).is_empty());
    }

    #[test]
    fn low_budget_massive_scale_fires_budget_vs_scale() {
        let mut constraints = base_vector();
        constraints.budget = Budget::Low;
        constraints.scale = Scale::Massive;
        let tensions = TensionInsight::detect_all(&constraints);
        assert!(tensions.iter().any(|t| t.name == "Budget vs Scale Tension"));
    }

    #[test]
    fn multiple_tensions_fire_independently_in_declaration_order() {
        let constraints = ConstraintVector::new(
            Budget::Low,
            Performance::Latency,
            Scale::Massive,
            TeamSkill::Beginner,
            TimeToMarket::Urgent,
            DataComplexity::Complex,
            Consistency::Strong,
        );
        let tensions = TensionInsight::detect_all(&constraints);
        let names: Vec<_> = tensions.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Budget vs Scale Tension",
                "Speed vs Complexity Tension",
                "Consistency vs Latency Tension",
                "Team Skill vs Scale Tension"
            ]
        );
    }
}
