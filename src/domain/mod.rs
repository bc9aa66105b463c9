//! Domain layer: pure, deterministic analysis with no I/O.

pub mod analysis;
pub mod catalog;
pub mod evaluation;
pub mod foundation;
pub mod insight;
