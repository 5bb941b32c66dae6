use std::{collections::HashSet, fmt};

use super::{
    metric::QueryMetric,
    overlap::overlap,
    spearman::{spearman, LengthPolicy},
};
use crate::result_set::{Query, ResultSet};

/// A query that produced no metric. None of these abort a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The query has no entry in the candidate results.
    MissingCandidate(Query),
    /// The query has no entry in the reference results.
    MissingReference(Query),
    /// The query was already compared earlier in the given order.
    Repeated(Query),
    /// Both sides exist but could not be scored.
    Skipped { query: Query, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCandidate(query) => write!(f, "Query {query} not found in your results"),
            Self::MissingReference(query) => {
                write!(f, "Query {query} not found in reference results")
            }
            Self::Repeated(query) => write!(f, "Query {query} listed more than once"),
            Self::Skipped { query, reason } => write!(f, "Query {query} skipped: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    pub metrics: Vec<QueryMetric>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryComparator {
    length_policy: LengthPolicy,
}

impl QueryComparator {
    pub const fn new(length_policy: LengthPolicy) -> Self {
        Self { length_policy }
    }

    /// Compares every reference query, in ascending query order.
    pub fn compare(&self, candidates: &ResultSet, reference: &ResultSet) -> Comparison {
        let mut comparison = Comparison::default();

        for (query, reference_urls) in reference {
            self.compare_query(query, candidates, reference_urls, &mut comparison);
        }

        comparison
    }

    /// Compares `queries` in the order given, e.g. the order of the query file.
    ///
    /// Each query is compared once; later repeats become [`Diagnostic::Repeated`].
    pub fn compare_ordered<Q: AsRef<str>>(
        &self,
        queries: &[Q],
        candidates: &ResultSet,
        reference: &ResultSet,
    ) -> Comparison {
        let mut comparison = Comparison::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for query in queries {
            let query = query.as_ref();
            if !seen.insert(query) {
                comparison
                    .diagnostics
                    .push(Diagnostic::Repeated(query.to_string()));
                continue;
            }

            match reference.get(query) {
                Some(reference_urls) => {
                    self.compare_query(query, candidates, reference_urls, &mut comparison);
                }
                None => comparison
                    .diagnostics
                    .push(Diagnostic::MissingReference(query.to_string())),
            }
        }

        comparison
    }

    fn compare_query(
        &self,
        query: &str,
        candidates: &ResultSet,
        reference_urls: &[String],
        comparison: &mut Comparison,
    ) {
        let Some(candidate_urls) = candidates.get(query).map(Vec::as_slice) else {
            comparison
                .diagnostics
                .push(Diagnostic::MissingCandidate(query.to_string()));
            return;
        };

        let overlap = overlap(candidate_urls, reference_urls);

        match spearman(candidate_urls, reference_urls, self.length_policy) {
            Ok(correlation) => comparison.metrics.push(QueryMetric::new(
                query.to_string(),
                overlap.count,
                overlap.percent,
                correlation,
            )),
            Err(e) => comparison.diagnostics.push(Diagnostic::Skipped {
                query: query.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
