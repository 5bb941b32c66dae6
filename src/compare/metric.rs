use serde::{Deserialize, Serialize};

use crate::result_set::Query;

/// Agreement between the candidate and reference results of a single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMetric {
    pub query: Query,
    pub overlap_count: f64,
    pub overlap_percent: f64,
    pub correlation: f64,
}

impl QueryMetric {
    pub const fn new(
        query: Query,
        overlap_count: f64,
        overlap_percent: f64,
        correlation: f64,
    ) -> Self {
        Self {
            query,
            overlap_count,
            overlap_percent,
            correlation,
        }
    }
}
