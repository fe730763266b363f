//! Counting primitives shared by the reports.
//!
//! Ties are resolved by value order so every result is deterministic: the
//! mode is the smallest of the most frequent values, and equal counts are
//! listed in ascending value order.

use std::collections::BTreeMap;

/// Occurrence count of every distinct value, keyed in ascending order.
pub fn count_values<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value, or `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in count_values(values) {
        // Strictly greater keeps the earlier (smaller) value on ties.
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Distinct values with their counts, most frequent first.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = count_values(values).into_iter().collect();
    // Stable sort keeps ascending value order within equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
