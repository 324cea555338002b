// src/core/tokenize.rs
use crate::core::stopwords::stop_words;

/// Characters that terminate a token. Digits are delimiters, so a purely
/// numeric substring never forms a token.
const DELIMITERS: &str = " \t\n\u{000C}\"\r\\/.,:;?!@#$%^&*`~|<>()[]{}'+-=1234567890";

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(c)
}

/// Splits one raw line into normalized tokens and emits a count
/// contribution of 1 for each token that survives stopword filtering.
///
/// The line is lowercased first, then split on the delimiter class; empty
/// fragments and stopwords are discarded. Stateless across calls.
///
/// # Arguments
///
/// * `line` - One line of raw input text
///
/// # Returns
///
/// * The `(word, 1)` contributions for this line, in order of appearance
#[must_use]
pub fn tokenize_and_filter(line: &str) -> Vec<(String, u64)> {
    let lowered = line.to_lowercase();
    lowered
        .split(is_delimiter)
        .filter(|token| !token.is_empty())
        .filter(|token| !stop_words().contains(token))
        .map(|token| (token.to_owned(), 1))
        .collect()
}
