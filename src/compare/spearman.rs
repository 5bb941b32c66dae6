use tracing::debug;

use super::rank::{rank, sentinel_rank};
use crate::error::{Error, Result};

/// What to do when the candidate and reference lists differ in length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LengthPolicy {
    /// Compare the first `len(reference)` positions. Extra candidate results are
    /// ignored and missing ones take the sentinel rank.
    #[default]
    Align,
    /// Refuse to correlate lists of different lengths.
    Reject,
}

/// Spearman's rank correlation of `candidate` against `reference`.
///
/// Candidate URLs are ranked by their position in `reference`, unseen URLs
/// taking the sentinel rank, and compared position by position with the
/// reference's own ranks:
///
/// `rho = 1 - 6 * sum(d_i^2) / (n * (n^2 - 1))`, `n = len(reference)`
///
/// Fewer than two reference results yield `0.0`. Sentinel ranks can push the raw
/// value outside `[-1, 1]`, so the result is clamped.
#[allow(clippy::cast_precision_loss)]
pub fn spearman<S: AsRef<str>>(
    candidate: &[S],
    reference: &[S],
    policy: LengthPolicy,
) -> Result<f64> {
    if policy == LengthPolicy::Reject && candidate.len() != reference.len() {
        return Err(Error::LengthMismatch {
            candidate: candidate.len(),
            reference: reference.len(),
        });
    }

    if reference.len() < 2 {
        return Ok(0.0);
    }

    let candidate_ranks = rank(candidate, reference);
    let reference_ranks = rank(reference, reference);
    let missing = sentinel_rank(reference.len());

    let d_square_sum: f64 = reference_ranks
        .iter()
        .enumerate()
        .map(|(i, reference_rank)| {
            let d = candidate_ranks.get(i).copied().unwrap_or(missing) - reference_rank;
            d * d
        })
        .sum();

    let n = reference.len() as f64;
    let rho = 1.0 - (6.0 * d_square_sum) / (n * (n * n - 1.0));

    if (-1.0..=1.0).contains(&rho) {
        Ok(rho)
    } else {
        debug!(rho = rho, "clamping correlation into [-1, 1]");
        Ok(rho.clamp(-1.0, 1.0))
    }
}
