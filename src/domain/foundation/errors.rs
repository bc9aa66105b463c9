//! Error types for the domain layer.

use thiserror::Error;

/// Error returned when a constraint-dimension value fails to parse.
///
/// Malformed vectors are a construction-time concern: once a
/// [`ConstraintVector`](super::ConstraintVector) exists it is valid by type,
/// and no evaluation path can fail on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {dimension} value (expected one of {expected:?})")]
pub struct ParseDimensionError {
    /// The dimension whose value failed to parse.
    pub dimension: &'static str,
    /// The rejected input.
    pub value: String,
    /// The accepted keys for this dimension.
    pub expected: &'static [&'static str],
}

impl ParseDimensionError {
    /// Creates a parse error for a dimension.
    pub fn new(
        dimension: &'static str,
        value: impl Into<String>,
        expected: &'static [&'static str],
    ) -> Self {
        Self {
            dimension,
            value: value.into(),
            expected,
        }
    }
}
