use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub count: f64,
    pub percent: f64,
}

/// Counts candidate URLs found anywhere in `reference`, by exact string match.
///
/// A URL repeated in `candidate` is counted once, so `count` never exceeds the
/// length of either list. `percent` is relative to the full length of
/// `reference`, repeats included, so a list with repeated URLs overlaps itself
/// by less than 100%. It is `0.0` when `reference` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn overlap<S: AsRef<str>>(candidate: &[S], reference: &[S]) -> Overlap {
    let reference_urls: HashSet<&str> = reference.iter().map(AsRef::<str>::as_ref).collect();
    let mut counted: HashSet<&str> = HashSet::new();

    let count = candidate
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|url| reference_urls.contains(url) && counted.insert(*url))
        .count() as f64;

    let percent = if reference.is_empty() {
        0.0
    } else {
        count / reference.len() as f64 * 100.0
    };

    Overlap { count, percent }
}
