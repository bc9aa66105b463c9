//! Property tests for the analysis engine.
//!
//! Exercise the analyzers over the whole constraint space: every component
//! must be deterministic, total over its inputs, and the synthesized
//! narrative must never crown a single option.

use proptest::prelude::*;

use stack_referee::application::handlers::{AnalysisRequest, RunAnalysisHandler};
use stack_referee::domain::analysis::{
    CrossOptionComparator, FitAssessor, Scenario, ScenarioAnalyzer, SensitivityAnalyzer,
};
use stack_referee::domain::catalog::standard_catalog;
use stack_referee::domain::evaluation::TradeoffEvaluator;
use stack_referee::domain::foundation::{
    Budget, Consistency, ConstraintVector, DataComplexity, Dimension, FitTier, Impact,
    Performance, Scale, TeamSkill, TimeToMarket,
};
use stack_referee::domain::insight::{InsightSynthesizer, SituationalProfile};

fn vector_strategy() -> impl Strategy<Value = ConstraintVector> {
    (
        prop::sample::select(Budget::all().to_vec()),
        prop::sample::select(Performance::all().to_vec()),
        prop::sample::select(Scale::all().to_vec()),
        prop::sample::select(TeamSkill::all().to_vec()),
        prop::sample::select(TimeToMarket::all().to_vec()),
        prop::sample::select(DataComplexity::all().to_vec()),
        prop::sample::select(Consistency::all().to_vec()),
    )
        .prop_map(
            |(budget, performance, scale, team_skill, time_to_market, data_complexity, consistency)| {
                ConstraintVector::new(
                    budget,
                    performance,
                    scale,
                    team_skill,
                    time_to_market,
                    data_complexity,
                    consistency,
                )
            },
        )
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(constraints in vector_strategy()) {
        for profile in standard_catalog().iter() {
            let first = TradeoffEvaluator::evaluate(profile, &constraints);
            let second = TradeoffEvaluator::evaluate(profile, &constraints);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn sensitivity_map_is_total_and_canonical(constraints in vector_strategy()) {
        let map = SensitivityAnalyzer::analyze(&constraints);
        prop_assert_eq!(map.entries().len(), 7);
        let dims: Vec<Dimension> = map.entries().iter().map(|e| e.dimension).collect();
        prop_assert_eq!(dims, Dimension::all().to_vec());
        for entry in map.entries() {
            prop_assert!(matches!(entry.impact, Impact::High | Impact::Medium | Impact::Low));
        }
    }

    #[test]
    fn fit_assessment_is_closed_over_tiers(constraints in vector_strategy()) {
        for profile in standard_catalog().iter() {
            let fit = FitAssessor::assess(&profile.name, &constraints);
            prop_assert!(matches!(
                fit.tier,
                FitTier::StrongFit | FitTier::ModerateFit | FitTier::RiskyFit
            ));
            prop_assert!(!fit.reasoning.is_empty());
        }
    }

    #[test]
    fn unknown_option_always_gets_the_pending_assessment(constraints in vector_strategy()) {
        let fit = FitAssessor::assess("CockroachDB", &constraints);
        prop_assert_eq!(fit.tier, FitTier::ModerateFit);
        prop_assert_eq!(fit.reasoning.as_str(), "Evaluation pending");
        prop_assert!(fit.context_warning.is_empty());
    }

    #[test]
    fn narrative_never_declares_a_winner(constraints in vector_strategy()) {
        let narrative = InsightSynthesizer::synthesize(&[], &constraints, standard_catalog());
        prop_assert!(narrative.contains("We don't declare a winner"));
    }

    #[test]
    fn known_scenarios_cover_the_whole_catalog(constraints in vector_strategy()) {
        for scenario in Scenario::all() {
            let outcomes = ScenarioAnalyzer::analyze(scenario.id(), &constraints, standard_catalog());
            prop_assert_eq!(outcomes.len(), standard_catalog().len());
            for outcome in &outcomes {
                prop_assert!(!outcome.projection.is_empty());
            }
        }
    }

    #[test]
    fn unknown_scenario_projects_nothing(constraints in vector_strategy()) {
        let outcomes = ScenarioAnalyzer::analyze("meteor_strike", &constraints, standard_catalog());
        prop_assert!(outcomes.is_empty());
    }

    #[test]
    fn at_least_two_comparisons_always_emitted(constraints in vector_strategy()) {
        let comparisons = CrossOptionComparator::compare(&constraints);
        prop_assert!(comparisons.len() >= 2);
    }

    #[test]
    fn full_report_components_are_deterministic(constraints in vector_strategy()) {
        let request = AnalysisRequest { constraints, scenario: Some("budget_cuts".to_string()) };
        let first = RunAnalysisHandler::handle(&request);
        let second = RunAnalysisHandler::handle(&request);
        // Ids and timestamps differ per run; every analytical component
        // must not.
        prop_assert_eq!(first.options, second.options);
        prop_assert_eq!(first.sensitivity, second.sensitivity);
        prop_assert_eq!(first.comparisons, second.comparisons);
        prop_assert_eq!(first.scenario, second.scenario);
        prop_assert_eq!(first.insight, second.insight);
    }
}

#[test]
fn startup_vector_worked_example() {
    let constraints = ConstraintVector::new(
        Budget::Low,
        Performance::Latency,
        Scale::Small,
        TeamSkill::Beginner,
        TimeToMarket::Urgent,
        DataComplexity::Simple,
        Consistency::Eventual,
    );

    let fit = FitAssessor::assess("DynamoDB", &constraints);
    assert_eq!(fit.tier, FitTier::StrongFit);
    assert!(fit.reasoning.contains("Free tier"));

    let profile = SituationalProfile::match_profile(&constraints);
    assert_eq!(profile.name, "Cost-Conscious Startup");
}

#[test]
fn budget_versus_scale_worked_example() {
    let constraints = ConstraintVector::new(
        Budget::Low,
        Performance::Balanced,
        Scale::Massive,
        TeamSkill::Intermediate,
        TimeToMarket::Flexible,
        DataComplexity::Moderate,
        Consistency::Eventual,
    );

    let map = SensitivityAnalyzer::analyze(&constraints);
    assert_eq!(map.get(Dimension::Budget).impact, Impact::High);

    let narrative = InsightSynthesizer::synthesize(&[], &constraints, standard_catalog());
    assert!(narrative.contains("**Budget vs Scale Tension:**"));
}
