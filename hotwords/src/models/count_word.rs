// src/models/count_word.rs

use serde::{Deserialize, Serialize};

use crate::models::WordCount;

/// The inverted pair used for ranking. Several entries may share a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountWord {
    pub count: u64,
    pub word: String,
}

impl From<WordCount> for CountWord {
    fn from(record: WordCount) -> Self {
        Self {
            count: record.count,
            word: record.word,
        }
    }
}
