//! Grouped-count tally used by the task statistics summary.

use std::collections::HashMap;

/// Count occurrences of each observed value.
///
/// Unobserved values are simply absent (no zero-fill). The result is
/// deterministically ordered: count descending, then value ascending.
pub fn tally<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut groups: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    groups
}
