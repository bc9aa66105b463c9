//! The standard option catalog - four managed cloud storage engines.
//!
//! Process-wide read-only reference data, initialized once. Rules join on the
//! exported name constants rather than repeating string literals.

use once_cell::sync::Lazy;

use super::{
    BaseComplexity, Category, ConsistencyModel, OptionCatalog, OptionProfile, PricingModel,
    ScalingModel, SetupTime,
};

pub const POSTGRES: &str = "PostgreSQL (RDS)";
pub const DYNAMODB: &str = "DynamoDB";
pub const MONGODB: &str = "MongoDB Atlas";
pub const REDIS: &str = "Redis (ElastiCache)";

static STANDARD_CATALOG: Lazy<OptionCatalog> = Lazy::new(|| {
    OptionCatalog::new(vec![
        OptionProfile {
            name: POSTGRES.to_string(),
            description: "Managed relational database with ACID guarantees".to_string(),
            category: Category::Relational,
            managed: true,
            base_complexity: BaseComplexity::Intermediate,
            pricing_model: PricingModel::InstanceBased,
            scaling_model: ScalingModel::Vertical,
            setup_time: SetupTime::Medium,
            consistency: ConsistencyModel::Strong,
            good_for: tags(&["complex queries", "transactions", "relational data"]),
            challenges: tags(&["scaling writes", "cost at scale", "schema migrations"]),
        },
        OptionProfile {
            name: DYNAMODB.to_string(),
            description: "Serverless NoSQL database with predictable performance".to_string(),
            category: Category::NoSql,
            managed: true,
            base_complexity: BaseComplexity::Beginner,
            pricing_model: PricingModel::UsageBased,
            scaling_model: ScalingModel::Automatic,
            setup_time: SetupTime::Fast,
            consistency: ConsistencyModel::EventualOrStrong,
            good_for: tags(&["key-value", "high throughput", "simple queries"]),
            challenges: tags(&["complex queries", "data modeling", "cost unpredictability"]),
        },
        OptionProfile {
            name: MONGODB.to_string(),
            description: "Flexible document database with rich query capabilities".to_string(),
            category: Category::Document,
            managed: true,
            base_complexity: BaseComplexity::Beginner,
            pricing_model: PricingModel::InstanceBased,
            scaling_model: ScalingModel::Horizontal,
            setup_time: SetupTime::Fast,
            consistency: ConsistencyModel::Tunable,
            good_for: tags(&["flexible schema", "nested data", "rapid development"]),
            challenges: tags(&["data consistency", "query optimization", "memory usage"]),
        },
        OptionProfile {
            name: REDIS.to_string(),
            description: "In-memory data store for caching and real-time applications".to_string(),
            category: Category::Cache,
            managed: true,
            base_complexity: BaseComplexity::Intermediate,
            pricing_model: PricingModel::InstanceBased,
            scaling_model: ScalingModel::VerticalAndHorizontal,
            setup_time: SetupTime::Medium,
            consistency: ConsistencyModel::Strong,
            good_for: tags(&["caching", "session store", "real-time analytics"]),
            challenges: tags(&["data persistence", "memory costs", "not primary database"]),
        },
    ])
});

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Returns the standard catalog, loaded once per process.
pub fn standard_catalog() -> &'static OptionCatalog {
    &STANDARD_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_four_options() {
        assert_eq!(standard_catalog().len(), 4);
    }

    #[test]
    fn name_constants_resolve_in_the_catalog() {
        for name in [POSTGRES, DYNAMODB, MONGODB, REDIS] {
            assert!(standard_catalog().get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn all_standard_options_are_managed() {
        assert!(standard_catalog().iter().all(|o| o.managed));
    }

    #[test]
    fn dynamodb_is_the_only_usage_based_option() {
        let usage_based: Vec<_> = standard_catalog()
            .iter()
            .filter(|o| o.pricing_model == PricingModel::UsageBased)
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(usage_based, vec![DYNAMODB]);
    }

    #[test]
    fn profiles_carry_three_tags_each() {
        for profile in standard_catalog().iter() {
            assert_eq!(profile.good_for.len(), 3, "{}", profile.name);
            assert_eq!(profile.challenges.len(), 3, "{}", profile.name);
        }
    }
}
