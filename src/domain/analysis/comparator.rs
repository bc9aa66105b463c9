//! Cross-Option Comparator - pairwise and contextual comparison narratives.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConstraintVector, DataComplexity, Performance, Scale};

/// One titled comparison narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub title: String,
    pub narrative: String,
}

impl Comparison {
    fn new(title: &str, narrative: &str) -> Self {
        Self {
            title: title.to_string(),
            narrative: narrative.to_string(),
        }
    }
}

/// Emits a fixed sequence of named comparisons, each gated by a predicate on
/// the constraint vector. Output order follows declaration order, not
/// relevance; between 2 and 4 comparisons are produced for any valid vector.
pub struct CrossOptionComparator;

impl CrossOptionComparator {
    /// Generates the comparison narratives for the vector.
    pub fn compare(constraints: &ConstraintVector) -> Vec<Comparison> {
        let mut comparisons = Vec::new();

        if constraints.data_complexity == DataComplexity::Complex {
            comparisons.push(Comparison::new(
                "PostgreSQL vs DynamoDB",
                "For complex data, PostgreSQL's JOINs and transactions are native, while \
                 DynamoDB requires denormalization and application-side logic. PostgreSQL wins \
                 on data modeling flexibility.",
            ));
        } else {
            comparisons.push(Comparison::new(
                "PostgreSQL vs DynamoDB",
                "For simple data, DynamoDB's auto-scaling and pay-per-use pricing is more \
                 cost-effective than PostgreSQL's always-on instances. DynamoDB wins on \
                 operational simplicity.",
            ));
        }

        // Unconditional: the schema-flexibility framing applies to every vector.
        comparisons.push(Comparison::new(
            "MongoDB vs PostgreSQL",
            "MongoDB offers schema flexibility for rapid iteration, while PostgreSQL enforces \
             structure for data integrity. Choose MongoDB for evolving schemas, PostgreSQL for \
             stable data models.",
        ));

        if constraints.performance == Performance::Latency {
            comparisons.push(Comparison::new(
                "DynamoDB vs Redis",
                "Redis provides sub-millisecond latency but isn't a primary database. DynamoDB \
                 offers single-digit millisecond latency as a full database. Use Redis for \
                 caching + another DB for storage.",
            ));
        }

        if constraints.scale == Scale::Massive {
            comparisons.push(Comparison::new(
                "At Massive Scale",
                "DynamoDB and MongoDB Atlas are purpose-built for horizontal scaling. \
                 PostgreSQL requires architectural workarounds (sharding, read replicas) that \
                 increase complexity significantly.",
            ));
        }

        comparisons
    }
}
