//! Rule banks for the trade-off evaluator.
//!
//! Each rule is a (predicate, category, text) triple. Banks are ordered
//! slices, one per constraint dimension plus a constraint-independent general
//! bank, so rules can be added or tested in isolation without touching
//! control flow. All matching rules fire; nothing here is first-match-wins.
//!
//! Several rules are deliberately one-sided: they name a single option with
//! no symmetric branch for the others. Completing the tables would change the
//! advisory content, so the asymmetry is preserved as-is.

use crate::domain::catalog::{
    BaseComplexity, ConsistencyModel, OptionProfile, PricingModel, SetupTime, DYNAMODB, MONGODB,
    POSTGRES, REDIS,
};
use crate::domain::foundation::{
    Budget, Consistency, ConstraintVector, DataComplexity, Dimension, Performance, Scale,
    TeamSkill, TimeToMarket,
};

use super::Category;

/// Predicate over the constraint vector and one option profile.
pub type RulePredicate = fn(&ConstraintVector, &OptionProfile) -> bool;

/// One entry in a rule bank.
#[derive(Clone, Copy)]
pub struct Rule {
    pub applies: RulePredicate,
    pub category: Category,
    pub text: &'static str,
}

impl Rule {
    /// Returns true if this rule fires for the given input.
    pub fn fires(&self, constraints: &ConstraintVector, profile: &OptionProfile) -> bool {
        (self.applies)(constraints, profile)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("category", &self.category)
            .field("text", &self.text)
            .finish()
    }
}

static BUDGET_RULES: &[Rule] = &[
    Rule {
        applies: |c, o| c.budget == Budget::Low && o.pricing_model == PricingModel::UsageBased,
        category: Category::Strength,
        text: "Pay only for what you use - great for variable workloads",
    },
    Rule {
        applies: |c, o| c.budget == Budget::Low && o.pricing_model != PricingModel::UsageBased,
        category: Category::Limitation,
        text: "Always-on instance costs even during low usage",
    },
    Rule {
        applies: |c, o| c.budget == Budget::Low && o.is(POSTGRES),
        category: Category::HiddenCost,
        text: "Multi-AZ deployment doubles costs but often necessary for production",
    },
    Rule {
        applies: |c, o| c.budget == Budget::Low && o.is(MONGODB),
        category: Category::HiddenCost,
        text: "Memory usage can spike with poor indexing, increasing cluster size",
    },
    Rule {
        applies: |c, o| c.budget == Budget::Low && o.is(REDIS),
        category: Category::HiddenCost,
        text: "High memory costs for large datasets - RAM is expensive",
    },
    Rule {
        applies: |c, o| c.budget == Budget::High && o.pricing_model == PricingModel::InstanceBased,
        category: Category::Strength,
        text: "Predictable costs with reserved instances available",
    },
    Rule {
        applies: |c, o| c.budget == Budget::High && o.is(POSTGRES),
        category: Category::Strength,
        text: "Can afford performance insights, read replicas, and optimized instances",
    },
];

static PERFORMANCE_RULES: &[Rule] = &[
    Rule {
        applies: |c, o| c.performance == Performance::Latency && o.is(REDIS),
        category: Category::Strength,
        text: "Sub-millisecond latency for reads and writes",
    },
    Rule {
        applies: |c, o| c.performance == Performance::Latency && o.is(DYNAMODB),
        category: Category::Strength,
        text: "Single-digit millisecond latency at any scale",
    },
    Rule {
        applies: |c, o| c.performance == Performance::Latency && !o.is(REDIS) && !o.is(DYNAMODB),
        category: Category::Limitation,
        text: "Higher latency than in-memory or pure key-value stores",
    },
    Rule {
        applies: |c, o| c.performance == Performance::Throughput && o.is(DYNAMODB),
        category: Category::Strength,
        text: "Unlimited throughput with on-demand mode",
    },
    Rule {
        applies: |c, o| c.performance == Performance::Throughput && o.is(MONGODB),
        category: Category::Strength,
        text: "Horizontal scaling handles high write throughput well",
    },
    Rule {
        applies: |c, o| c.performance == Performance::Throughput && o.is(POSTGRES),
        category: Category::Limitation,
        text: "Write throughput limited by single-master architecture",
    },
    Rule {
        applies: |c, o| c.performance == Performance::Balanced && o.is(MONGODB),
        category: Category::Strength,
        text: "Good balance of read/write performance with flexible queries",
    },
];

static SCALE_RULES: &[Rule] = &[
    Rule {
        applies: |c, o| c.scale == Scale::Small && o.setup_time == SetupTime::Fast,
        category: Category::Strength,
        text: "Quick to set up - perfect for small scale",
    },
    Rule {
        applies: |c, o| c.scale == Scale::Small && o.is(DYNAMODB),
        category: Category::AvoidWhen,
        text: "Your data access patterns are simple and cost matters more than auto-scaling",
    },
    Rule {
        applies: |c, o| c.scale == Scale::Medium && o.scaling_model.scales_out_smoothly(),
        category: Category::Strength,
        text: "Scales smoothly as your user base grows",
    },
    Rule {
        applies: |c, o| c.scale == Scale::Massive && o.is(DYNAMODB),
        category: Category::Strength,
        text: "Proven at massive scale - handles millions of requests per second",
    },
    Rule {
        applies: |c, o| c.scale == Scale::Massive && o.is(MONGODB),
        category: Category::Strength,
        text: "Sharding enables horizontal scaling to massive datasets",
    },
    Rule {
        applies: |c, o| c.scale == Scale::Massive && o.is(POSTGRES),
        category: Category::Limitation,
        text: "Vertical scaling has limits - eventual need for sharding or read replicas",
    },
    Rule {
        applies: |c, o| c.scale == Scale::Massive && o.is(POSTGRES),
        category: Category::HiddenCost,
        text: "Read replica lag and synchronization complexity at scale",
    },
    Rule {
        applies: |c, o| c.scale == Scale::Massive && o.is(REDIS),
        category: Category::HiddenCost,
        text: "Memory costs become prohibitive at massive scale",
    },
    Rule {
        applies: |c, o| c.scale == Scale::Massive && o.is(REDIS),
        category: Category::AvoidWhen,
        text: "You need to store terabytes of data - Redis is best for hot data",
    },
];

static TEAM_SKILL_RULES: &[Rule] = &[
    Rule {
        applies: |c, o| {
            c.team_skill == TeamSkill::Beginner && o.base_complexity == BaseComplexity::Beginner
        },
        category: Category::Strength,
        text: "Gentle learning curve - good for teams new to databases",
    },
    Rule {
        applies: |c, o| {
            c.team_skill == TeamSkill::Beginner && o.base_complexity != BaseComplexity::Beginner
        },
        category: Category::Limitation,
        text: "Requires database expertise for optimization and troubleshooting",
    },
    Rule {
        applies: |c, o| c.team_skill == TeamSkill::Beginner && o.is(POSTGRES),
        category: Category::AvoidWhen,
        text: "Your team lacks SQL and query optimization experience",
    },
    Rule {
        applies: |c, o| c.team_skill == TeamSkill::Beginner && o.is(REDIS),
        category: Category::AvoidWhen,
        text: "Your team isn't familiar with caching strategies and data eviction policies",
    },
    Rule {
        applies: |c, o| c.team_skill == TeamSkill::Intermediate && o.is(MONGODB),
        category: Category::Strength,
        text: "Intuitive document model bridges SQL and NoSQL paradigms",
    },
    Rule {
        applies: |c, o| c.team_skill == TeamSkill::Expert && o.is(POSTGRES),
        category: Category::Strength,
        text: "Rich feature set rewards deep expertise - advanced indexing, partitioning, extensions",
    },
    Rule {
        applies: |c, o| {
            c.team_skill == TeamSkill::Expert && o.base_complexity == BaseComplexity::Beginner
        },
        category: Category::Limitation,
        text: "May feel limiting if team wants fine-grained control",
    },
];

static TIME_TO_MARKET_RULES: &[Rule] = &[
    Rule {
        applies: |c, o| c.time_to_market == TimeToMarket::Urgent && o.setup_time == SetupTime::Fast,
        category: Category::Strength,
        text: "Minimal setup time - deploy and iterate quickly",
    },
    Rule {
        applies: |c, o| c.time_to_market == TimeToMarket::Urgent && o.setup_time != SetupTime::Fast,
        category: Category::Limitation,
        text: "Setup and configuration takes time away from feature development",
    },
    Rule {
        applies: |c, o| c.time_to_market == TimeToMarket::Urgent && o.managed,
        category: Category::Strength,
        text: "Fully managed - no time spent on database operations",
    },
    Rule {
        applies: |c, o| c.time_to_market == TimeToMarket::Flexible && o.is(POSTGRES),
        category: Category::Strength,
        text: "Time to design proper schema and indexes pays off long-term",
    },
];

static DATA_COMPLEXITY_RULES: &[Rule] = &[
    Rule {
        applies: |c, o| c.data_complexity == DataComplexity::Simple && o.is(DYNAMODB),
        category: Category::Strength,
        text: "Perfect for simple key-value and single-table design",
    },
    Rule {
        applies: |c, o| c.data_complexity == DataComplexity::Simple && o.is(POSTGRES),
        category: Category::AvoidWhen,
        text: "Your data model is just key-value - simpler databases cost less",
    },
    Rule {
        applies: |c, o| c.data_complexity == DataComplexity::Moderate && o.is(MONGODB),
        category: Category::Strength,
        text: "Document model handles moderate complexity without rigid schemas",
    },
    Rule {
        applies: |c, o| c.data_complexity == DataComplexity::Moderate && o.is(POSTGRES),
        category: Category::Strength,
        text: "Relational model enforces data integrity for moderate complexity",
    },
    Rule {
        applies: |c, o| c.data_complexity == DataComplexity::Complex && o.is(POSTGRES),
        category: Category::Strength,
        text: "JOINs, constraints, and transactions handle complex relationships well",
    },
    Rule {
        applies: |c, o| c.data_complexity == DataComplexity::Complex && o.is(DYNAMODB),
        category: Category::Limitation,
        text: "Complex queries require multiple round-trips or denormalization",
    },
    Rule {
        applies: |c, o| c.data_complexity == DataComplexity::Complex && o.is(DYNAMODB),
        category: Category::AvoidWhen,
        text: "You need complex JOINs or ad-hoc queries across multiple entities",
    },
    Rule {
        applies: |c, o| c.data_complexity == DataComplexity::Complex && o.is(MONGODB),
        category: Category::Limitation,
        text: "Lack of JOINs requires embedding or multiple queries for complex data",
    },
];

static CONSISTENCY_RULES: &[Rule] = &[
    Rule {
        applies: |c, o| {
            c.consistency == Consistency::Strong && o.consistency == ConsistencyModel::Strong
        },
        category: Category::Strength,
        text: "Strong consistency guarantees - no stale reads",
    },
    Rule {
        applies: |c, o| {
            c.consistency == Consistency::Strong
                && o.consistency == ConsistencyModel::EventualOrStrong
        },
        category: Category::Limitation,
        text: "Requires explicit strong consistency mode - comes with latency trade-off",
    },
    Rule {
        applies: |c, o| {
            c.consistency == Consistency::Strong
                && o.consistency != ConsistencyModel::Strong
                && o.consistency != ConsistencyModel::EventualOrStrong
        },
        category: Category::Limitation,
        text: "Eventual consistency may cause race conditions in critical operations",
    },
    Rule {
        applies: |c, o| c.consistency == Consistency::Eventual && o.is(DYNAMODB),
        category: Category::Strength,
        text: "Eventual consistency mode offers lower latency and higher throughput",
    },
];

/// Constraint-independent observations keyed on option identity alone.
static GENERAL_RULES: &[Rule] = &[
    Rule {
        applies: |_, o| o.is(POSTGRES),
        category: Category::Strength,
        text: "ACID compliance and mature ecosystem with extensive tooling",
    },
    Rule {
        applies: |_, o| o.is(POSTGRES),
        category: Category::HiddenCost,
        text: "Schema migrations on large tables can cause downtime",
    },
    Rule {
        applies: |_, o| o.is(POSTGRES),
        category: Category::HiddenCost,
        text: "Connection pooling (RDS Proxy) costs extra but often needed",
    },
    Rule {
        applies: |_, o| o.is(DYNAMODB),
        category: Category::Strength,
        text: "Zero operational overhead - AWS handles everything",
    },
    Rule {
        applies: |_, o| o.is(DYNAMODB),
        category: Category::HiddenCost,
        text: "Global Secondary Indexes (GSIs) double storage and write costs",
    },
    Rule {
        applies: |_, o| o.is(DYNAMODB),
        category: Category::Limitation,
        text: "Data modeling requires upfront planning - hard to change access patterns",
    },
    Rule {
        applies: |_, o| o.is(MONGODB),
        category: Category::Strength,
        text: "Schema flexibility enables rapid iteration during development",
    },
    Rule {
        applies: |_, o| o.is(MONGODB),
        category: Category::HiddenCost,
        text: "Unplanned queries without proper indexes can crush performance",
    },
    Rule {
        applies: |_, o| o.is(MONGODB),
        category: Category::Limitation,
        text: "Transactions across shards have performance overhead",
    },
    Rule {
        applies: |_, o| o.is(REDIS),
        category: Category::Strength,
        text: "Ideal for session storage, rate limiting, and leaderboards",
    },
    Rule {
        applies: |_, o| o.is(REDIS),
        category: Category::Limitation,
        text: "Data loss risk without proper persistence configuration",
    },
    Rule {
        applies: |_, o| o.is(REDIS),
        category: Category::AvoidWhen,
        text: "You need it as your primary database - Redis is best as a complement",
    },
];

/// Returns the per-dimension banks in canonical evaluation order.
pub fn dimension_banks() -> &'static [(Dimension, &'static [Rule])] {
    static DIMENSION_BANKS: [(Dimension, &[Rule]); 7] = [
        (Dimension::Budget, BUDGET_RULES),
        (Dimension::PerformancePriority, PERFORMANCE_RULES),
        (Dimension::Scale, SCALE_RULES),
        (Dimension::TeamSkill, TEAM_SKILL_RULES),
        (Dimension::TimeToMarket, TIME_TO_MARKET_RULES),
        (Dimension::DataComplexity, DATA_COMPLEXITY_RULES),
        (Dimension::Consistency, CONSISTENCY_RULES),
    ];
    &DIMENSION_BANKS
}

/// Returns the constraint-independent general bank, applied after all
/// dimension banks.
pub fn general_bank() -> &'static [Rule] {
    GENERAL_RULES
}
