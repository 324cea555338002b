// src/core/topk.rs
use crate::models::CountWord;

/// Number of entries retained in the final ranking.
pub const K: usize = 200;

/// Truncates an ordered stream to its first `k` entries.
///
/// A pure bounded filter: no aggregation, no reordering. Must be fed the
/// single globally ordered stream; invoked against per-partition data it
/// would emit up to `k` entries per partition instead of `k` overall.
#[must_use]
pub fn select_top_k<I>(ranked: I, k: usize) -> Vec<CountWord>
where
    I: IntoIterator<Item = CountWord>,
{
    ranked.into_iter().take(k).collect()
}
