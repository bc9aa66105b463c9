//! Foundation module - Shared domain primitives.
//!
//! Contains the constraint vocabulary (dimension enums, the vector itself),
//! classification value objects, and domain error types.

mod constraints;
mod dimensions;
mod errors;
mod fit_tier;
mod impact;

pub use constraints::ConstraintVector;
pub use dimensions::{
    Budget, Consistency, DataComplexity, Dimension, Performance, Scale, TeamSkill, TimeToMarket,
};
pub use errors::ParseDimensionError;
pub use fit_tier::FitTier;
pub use impact::Impact;
