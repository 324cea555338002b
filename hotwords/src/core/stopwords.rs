// src/core/stopwords.rs
use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English words excluded from frequency counting. Entries are
/// already lowercase; lookups happen after line normalization.
static STOP_LIST: &[&str] = &[
    "very", "ourselves", "am", "doesn", "through", "me", "against", "up", "just", "her", "ours",
    "couldn", "because", "is", "isn", "it", "only", "in", "such", "too", "mustn", "under", "their",
    "if", "to", "my", "himself", "after", "why", "while", "can", "each", "itself", "his", "all",
    "once", "herself", "more", "our", "they", "hasn", "on", "ma", "them", "its", "where", "did",
    "ll", "you", "didn", "nor", "as", "now", "before", "those", "yours", "from", "who", "was", "m",
    "been", "will", "into", "same", "how", "some", "of", "out", "with", "s", "being", "t", "mightn",
    "she", "again", "be", "by", "shan", "have", "yourselves", "needn", "and", "are", "o", "these",
    "further", "most", "yourself", "having", "aren", "here", "he", "were", "but", "this", "myself",
    "own", "we", "so", "i", "does", "both", "when", "between", "d", "had", "the", "y", "has",
    "down", "off", "than", "haven", "whom", "wouldn", "should", "ve", "over", "themselves", "few",
    "then", "hadn", "what", "until", "won", "no", "about", "any", "that", "for", "shouldn", "don",
    "do", "there", "doing", "an", "or", "ain", "hers", "wasn", "weren", "above", "a", "at", "your",
    "theirs", "below", "other", "not", "re", "him", "during", "which",
];

static STOP_WORDS: OnceLock<StopWordSet> = OnceLock::new();

/// Fast-membership set of stopwords. Built once before any stage runs and
/// never mutated, so it is shared by every filtering unit without locking.
#[derive(Debug)]
pub struct StopWordSet {
    words: HashSet<&'static str>,
}

impl StopWordSet {
    fn build() -> Self {
        Self {
            words: STOP_LIST.iter().copied().collect(),
        }
    }

    /// Exact-match lookup. Callers must normalize first; the set holds
    /// lowercase entries only.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Returns the process-wide stopword set, initialized on first use.
#[must_use]
pub fn stop_words() -> &'static StopWordSet {
    STOP_WORDS.get_or_init(StopWordSet::build)
}
