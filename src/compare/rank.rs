use std::collections::HashMap;

/// Rank given to URLs that never appear in the reference list.
#[allow(clippy::cast_precision_loss)]
pub fn sentinel_rank(reference_len: usize) -> f64 {
    (reference_len + 1) as f64
}

/// Maps every URL of `target` to its 1-based position in `reference`.
///
/// The first occurrence wins when `reference` repeats a URL. URLs missing from
/// `reference` get [`sentinel_rank`], which is worse than any real rank.
#[allow(clippy::cast_precision_loss)]
pub fn rank<S: AsRef<str>>(target: &[S], reference: &[S]) -> Vec<f64> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(reference.len());
    for (i, url) in reference.iter().enumerate() {
        positions.entry(url.as_ref()).or_insert(i + 1);
    }

    let missing = sentinel_rank(reference.len());

    target
        .iter()
        .map(|url| {
            positions
                .get(url.as_ref())
                .map_or(missing, |&position| position as f64)
        })
        .collect()
}
