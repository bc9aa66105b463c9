//! Catalog module - static reference data for candidate storage engines.
//!
//! The catalog is loaded once at startup and never mutated during analysis.
//! Option names are the join key used by every analyzer.

#[allow(clippy::module_inception)]
mod catalog;
mod options;
mod profile;

pub use catalog::OptionCatalog;
pub use options::{standard_catalog, DYNAMODB, MONGODB, POSTGRES, REDIS};
pub use profile::{
    BaseComplexity, Category, ConsistencyModel, OptionProfile, PricingModel, ScalingModel,
    SetupTime,
};
