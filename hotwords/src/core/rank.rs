// src/core/rank.rs
use std::cmp::Ordering;

use crate::models::{CountWord, WordCount};

/// Total order for ranked output: count descending, then word ascending.
///
/// The secondary key is what makes the order total over the whole
/// vocabulary rather than merely per count value, so equal-count words
/// always appear in the same sequence.
#[must_use]
pub fn rank_order(a: &CountWord, b: &CountWord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Inverts aggregated `(word, count)` records and produces the single
/// globally ordered, count-descending sequence spanning the vocabulary.
///
/// This is the one place requiring global ordering; it runs as a single
/// sequential unit over the full record set.
///
/// # Arguments
///
/// * `counts` - The complete aggregated record set
///
/// # Returns
///
/// * The whole vocabulary as `(count, word)` records in rank order
#[must_use]
pub fn sort_descending(counts: Vec<WordCount>) -> Vec<CountWord> {
    let mut ranked: Vec<CountWord> = counts.into_iter().map(CountWord::from).collect();
    ranked.sort_unstable_by(rank_order);
    ranked
}
