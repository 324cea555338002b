// src/models/word_count.rs

use serde::{Deserialize, Serialize};

/// One aggregated record: a word and its total occurrence count across the
/// corpus. Unique per word once aggregation has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}
