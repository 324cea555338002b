// src/core/aggregate.rs
use std::collections::HashMap;

/// Sums count contributions into per-word totals.
///
/// Grouping and reduction in one pass: every contribution for the same word
/// lands on the same map entry, so feeding a whole partition through here
/// yields exactly one total per unique word. Counters are u64, wide enough
/// for extremely frequent tokens.
///
/// # Arguments
///
/// * `counts` - The totals to add into
/// * `contributions` - `(word, n)` pairs to fold in
pub fn accumulate<I>(counts: &mut HashMap<String, u64>, contributions: I)
where
    I: IntoIterator<Item = (String, u64)>,
{
    for (word, n) in contributions {
        let total = counts.entry(word).or_insert(0);
        *total = total.saturating_add(n);
    }
}

/// Folds one partition's totals into the global totals, summing where both
/// sides counted the same word. This is the in-process stand-in for the
/// engine's grouping shuffle.
pub fn merge_counts(totals: &mut HashMap<String, u64>, partition: HashMap<String, u64>) {
    accumulate(totals, partition);
}
