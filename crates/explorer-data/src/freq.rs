//! Frequency counting shared by the statistics analyzers.

use std::collections::HashMap;
use std::hash::Hash;

/// The most frequently occurring value and its count.
///
/// Ties break to the value first encountered in iteration order, which makes
/// the result deterministic for an ordered dataset instead of depending on
/// hash-map internals. Returns `None` for an empty iterator.
pub fn most_frequent<T: Eq + Hash>(values: impl IntoIterator<Item = T>) -> Option<(T, u64)> {
    let mut counts: HashMap<T, (u64, usize)> = HashMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        let slot = counts.entry(value).or_insert((0, idx));
        slot.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, (count, _))| (value, count))
}

/// Occurrence counts for every distinct value, most frequent first.
///
/// Ties keep first-encountered order, mirroring [`most_frequent`].
pub fn value_counts<T: Eq + Hash>(values: impl IntoIterator<Item = T>) -> Vec<(T, u64)> {
    let mut counts: HashMap<T, (u64, usize)> = HashMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        let slot = counts.entry(value).or_insert((0, idx));
        slot.0 += 1;
    }

    let mut ranked: Vec<(T, u64, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().map(|(value, count, _)| (value, count)).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
