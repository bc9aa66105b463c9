//! Analysis Module - Pure domain services over the constraint vector.
//!
//! All services here are stateless transformations of immutable inputs; no
//! I/O, no shared mutable state, no suspension points. Concurrent analyses
//! need no coordination.
//!
//! # Components
//!
//! - `FitAssessor` - first-match-wins suitability tiers with rationale
//! - `SensitivityAnalyzer` - total per-dimension impact map
//! - `CrossOptionComparator` - declaration-ordered comparison narratives
//! - `ScenarioAnalyzer` - catalog-static stress-scenario projections

mod comparator;
mod fit_assessor;
mod scenarios;
mod sensitivity;

pub use comparator::{Comparison, CrossOptionComparator};
pub use fit_assessor::{FitAssessment, FitAssessor};
pub use scenarios::{Scenario, ScenarioAnalyzer, ScenarioOutcome};
pub use sensitivity::{SensitivityAnalyzer, SensitivityEntry, SensitivityMap};
