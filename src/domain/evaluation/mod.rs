//! Evaluation module - the accumulating trade-off rule engine.
//!
//! Two control disciplines exist in this crate and are deliberately kept
//! apart: this module accumulates every matching rule, while the fit assessor
//! and situational profiles (in `analysis` and `insight`) are
//! first-match-wins decision lists. Conflating them would silently change
//! observable behavior.

#[allow(clippy::module_inception)]
mod evaluation;
mod evaluator;
pub mod rules;

pub use evaluation::{Category, Evaluation};
pub use evaluator::TradeoffEvaluator;
pub use rules::{Rule, RulePredicate};
