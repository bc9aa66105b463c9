//! OptionProfile - static descriptive record for one candidate storage engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad family of a storage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Relational,
    #[serde(rename = "nosql")]
    NoSql,
    Document,
    Cache,
}

impl Category {
    /// Returns the wire key.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Relational => "relational",
            Category::NoSql => "nosql",
            Category::Document => "document",
            Category::Cache => "cache",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Baseline expertise an engine demands of its operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseComplexity {
    Beginner,
    Intermediate,
    Expert,
}

/// How the engine bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    UsageBased,
    InstanceBased,
}

/// The engine's native scaling direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingModel {
    Vertical,
    Horizontal,
    Automatic,
    VerticalAndHorizontal,
}

impl ScalingModel {
    /// Returns true if the engine grows without manual re-architecture.
    pub fn scales_out_smoothly(&self) -> bool {
        matches!(self, ScalingModel::Horizontal | ScalingModel::Automatic)
    }
}

/// How long initial provisioning takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupTime {
    Fast,
    Medium,
}

/// Consistency guarantees the engine offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyModel {
    Strong,
    EventualOrStrong,
    Tunable,
}

/// Static reference record for one candidate storage engine.
///
/// Profiles carry no judgement; the rule banks read these attributes and the
/// option name (the join key used by every analyzer) to produce observations.
/// Every option is treated as valid - no strawmen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionProfile {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub managed: bool,
    pub base_complexity: BaseComplexity,
    pub pricing_model: PricingModel,
    pub scaling_model: ScalingModel,
    pub setup_time: SetupTime,
    pub consistency: ConsistencyModel,
    /// Use-case tags the engine is good for, declaration order.
    pub good_for: Vec<String>,
    /// Known challenge tags, declaration order.
    pub challenges: Vec<String>,
}

impl OptionProfile {
    /// Returns true if this profile carries the given name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}
