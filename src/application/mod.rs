//! Application layer: orchestration over the pure domain analyzers.

pub mod handlers;
