mod comparator;
mod metric;
mod overlap;
mod rank;
mod spearman;

pub use comparator::{Comparison, Diagnostic, QueryComparator};
pub use metric::QueryMetric;
pub use overlap::{overlap, Overlap};
pub use rank::{rank, sentinel_rank};
pub use spearman::{spearman, LengthPolicy};
