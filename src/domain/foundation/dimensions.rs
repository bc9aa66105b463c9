//! The seven constraint dimensions and their closed value enumerations.
//!
//! Each dimension is a small closed enum; no ordering is implied between
//! members beyond what individual rules encode. `dimension_values!` generates
//! the shared value-object surface (serde names, `all()`, `key()`, `Display`,
//! `FromStr`) so the enums stay declarative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseDimensionError;

/// Generates a closed dimension-value enum with its key mapping.
macro_rules! dimension_values {
    (
        $(#[$meta:meta])*
        $name:ident, $dimension:literal, { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        // Deserialization goes through `FromStr` so the wire boundary and
        // string parsing share one rejection path and one error message.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                value
                    .parse()
                    .map_err(<D::Error as serde::de::Error>::custom)
            }
        }

        impl $name {
            /// Returns all values in declaration order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Returns the snake_case key used on the wire and in exports.
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Returns the accepted keys for this dimension.
            pub fn keys() -> &'static [&'static str] {
                &[$($key),+]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = ParseDimensionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err(ParseDimensionError::new($dimension, other, Self::keys())),
                }
            }
        }
    };
}

dimension_values!(
    /// How much the project can spend on storage.
    Budget, "budget", {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

dimension_values!(
    /// What matters most for performance.
    Performance, "performance_priority", {
        Latency => "latency",
        Throughput => "throughput",
        Balanced => "balanced",
    }
);

dimension_values!(
    /// Expected application scale.
    Scale, "scale", {
        Small => "small",
        Medium => "medium",
        Massive => "massive",
    }
);

dimension_values!(
    /// The team's database expertise.
    TeamSkill, "team_skill", {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Expert => "expert",
    }
);

dimension_values!(
    /// Launch urgency.
    TimeToMarket, "time_to_market", {
        Urgent => "urgent",
        Flexible => "flexible",
    }
);

dimension_values!(
    /// Complexity of the data model.
    DataComplexity, "data_complexity", {
        Simple => "simple",
        Moderate => "moderate",
        Complex => "complex",
    }
);

dimension_values!(
    /// Required consistency guarantees.
    Consistency, "consistency", {
        Eventual => "eventual",
        Strong => "strong",
    }
);

/// The seven constraint dimensions in canonical evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Budget,
    PerformancePriority,
    Scale,
    TeamSkill,
    TimeToMarket,
    DataComplexity,
    Consistency,
}

impl Dimension {
    /// Returns all dimensions in canonical order.
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Budget,
            Dimension::PerformancePriority,
            Dimension::Scale,
            Dimension::TeamSkill,
            Dimension::TimeToMarket,
            Dimension::DataComplexity,
            Dimension::Consistency,
        ]
    }

    /// Returns the snake_case key for this dimension.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Budget => "budget",
            Dimension::PerformancePriority => "performance_priority",
            Dimension::Scale => "scale",
            Dimension::TeamSkill => "team_skill",
            Dimension::TimeToMarket => "time_to_market",
            Dimension::DataComplexity => "data_complexity",
            Dimension::Consistency => "consistency",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Budget => "Budget",
            Dimension::PerformancePriority => "Performance Priority",
            Dimension::Scale => "Scale",
            Dimension::TeamSkill => "Team Skill",
            Dimension::TimeToMarket => "Time To Market",
            Dimension::DataComplexity => "Data Complexity",
            Dimension::Consistency => "Consistency",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_all_has_seven_entries_in_canonical_order() {
        let all = Dimension::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Dimension::Budget);
        assert_eq!(all[6], Dimension::Consistency);
    }

    #[test]
    fn budget_round_trips_through_from_str() {
        for value in Budget::all() {
            assert_eq!(value.key().parse::<Budget>().unwrap(), *value);
        }
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        let err = "enormous".parse::<Budget>().unwrap_err();
        assert_eq!(err.dimension, "budget");
        assert_eq!(err.value, "enormous");

        assert!("soon".parse::<TimeToMarket>().is_err());
        assert!("chaotic".parse::<Consistency>().is_err());
    }

    #[test]
    fn dimension_values_serialize_as_snake_case() {
        assert_eq!(serde_json::to_string(&Scale::Massive).unwrap(), "\"massive\"");
        assert_eq!(
            serde_json::to_string(&Performance::Throughput).unwrap(),
            "\"throughput\""
        );
        let parsed: TeamSkill = serde_json::from_str("\"beginner\"").unwrap();
        assert_eq!(parsed, TeamSkill::Beginner);
    }

    #[test]
    fn deserialization_errors_carry_the_parse_error_message() {
        let err = serde_json::from_str::<Budget>("\"enormous\"").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("budget"), "got: {msg}");
        assert!(msg.contains("low"), "got: {msg}");

        let err = serde_json::from_str::<Consistency>("\"chaotic\"").unwrap_err();
        assert!(err.to_string().contains("consistency"));
    }

    #[test]
    fn dimension_keys_match_wire_names() {
        assert_eq!(Dimension::PerformancePriority.key(), "performance_priority");
        assert_eq!(Dimension::TimeToMarket.display_name(), "Time To Market");
    }

    #[test]
    fn value_enums_expose_declaration_order() {
        assert_eq!(Budget::keys(), &["low", "medium", "high"]);
        assert_eq!(DataComplexity::keys(), &["simple", "moderate", "complex"]);
    }
}
