//! ConstraintVector - immutable structured description of the project's situation.

use serde::{Deserialize, Serialize};

use super::{
    Budget, Consistency, DataComplexity, Dimension, Performance, Scale, TeamSkill, TimeToMarket,
};

/// The caller's project priorities across the seven fixed dimensions.
///
/// All seven fields are mandatory; the collecting collaborator supplies a
/// complete vector and serde rejects anything malformed before construction.
/// The vector is read-only once built: every analyzer borrows it and none
/// mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintVector {
    pub budget: Budget,
    #[serde(rename = "performance_priority")]
    pub performance: Performance,
    pub scale: Scale,
    pub team_skill: TeamSkill,
    pub time_to_market: TimeToMarket,
    pub data_complexity: DataComplexity,
    pub consistency: Consistency,
}

impl ConstraintVector {
    /// Creates a vector from all seven dimension values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        budget: Budget,
        performance: Performance,
        scale: Scale,
        team_skill: TeamSkill,
        time_to_market: TimeToMarket,
        data_complexity: DataComplexity,
        consistency: Consistency,
    ) -> Self {
        Self {
            budget,
            performance,
            scale,
            team_skill,
            time_to_market,
            data_complexity,
            consistency,
        }
    }

    /// Returns the literal key of the value held by a dimension.
    pub fn value_of(&self, dimension: Dimension) -> &'static str {
        match dimension {
            Dimension::Budget => self.budget.key(),
            Dimension::PerformancePriority => self.performance.key(),
            Dimension::Scale => self.scale.key(),
            Dimension::TeamSkill => self.team_skill.key(),
            Dimension::TimeToMarket => self.time_to_market.key(),
            Dimension::DataComplexity => self.data_complexity.key(),
            Dimension::Consistency => self.consistency.key(),
        }
    }

    /// Iterates (dimension, literal value) pairs in canonical order.
    ///
    /// Used by the export artifact to echo the vector back verbatim.
    pub fn literal_values(&self) -> impl Iterator<Item = (Dimension, &'static str)> + '_ {
        Dimension::all().iter().map(|d| (*d, self.value_of(*d)))
    }
}
