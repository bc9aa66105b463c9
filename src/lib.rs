//! Stack Referee - Constraint-Driven Storage Advisor
//!
//! This crate evaluates managed database options against a seven-dimension
//! constraint vector and reports trade-offs, fit tiers, sensitivities, and
//! what-if projections. It deliberately never declares a winner.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
