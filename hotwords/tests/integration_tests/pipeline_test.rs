// tests/integration_tests/pipeline_test.rs
use super::common::{create_test_file, setup_corpus_directory};
use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

use hotwords::{K, run_pipeline, stop_words};

fn parse_output(content: &str) -> Vec<(u64, String)> {
    content
        .lines()
        .map(|line| {
            let (count, word) = line.split_once('\t').expect("line should be count\\tword");
            (count.parse().expect("count should be numeric"), word.to_owned())
        })
        .collect()
}

#[test]
fn test_full_corpus_ranking() -> Result<()> {
    let corpus = setup_corpus_directory()?;
    let out_dir = TempDir::new()?;
    let output = out_dir.path().join("ranked.txt");

    let written = run_pipeline(corpus.path(), &output)?;
    assert_eq!(written, 9);

    assert_eq!(
        fs::read_to_string(&output)?,
        "5\tfox\n\
         2\tmarket\n\
         1\tcheered\n\
         1\tjumps\n\
         1\tprices\n\
         1\tquick\n\
         1\trose\n\
         1\truns\n\
         1\twatchers\n"
    );
    Ok(())
}

#[test]
fn test_output_properties() -> Result<()> {
    let corpus = setup_corpus_directory()?;
    let out_dir = TempDir::new()?;
    let output = out_dir.path().join("ranked.txt");

    run_pipeline(corpus.path(), &output)?;
    let records = parse_output(&fs::read_to_string(&output)?);

    assert!(records.len() <= K);

    // Non-increasing counts, ties in ascending word order.
    for pair in records.windows(2) {
        assert!(pair[0].0 >= pair[1].0, "counts must be non-increasing");
        if pair[0].0 == pair[1].0 {
            assert!(pair[0].1 < pair[1].1, "tied counts must be word-ordered");
        }
    }

    // No stopwords and no duplicates in the output.
    let mut seen = HashSet::new();
    for (_, word) in &records {
        assert!(!stop_words().contains(word), "{word} is a stopword");
        assert!(seen.insert(word.clone()), "{word} appears twice");
    }
    Ok(())
}

#[test]
fn test_reruns_are_byte_identical() -> Result<()> {
    let corpus = setup_corpus_directory()?;
    let out_dir = TempDir::new()?;
    let first = out_dir.path().join("first.txt");
    let second = out_dir.path().join("second.txt");

    run_pipeline(corpus.path(), &first)?;
    run_pipeline(corpus.path(), &second)?;

    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

// Three-letter q-words: none collide with the stopword list and none
// contain delimiter characters.
fn synthetic_word(i: usize) -> String {
    let high = char::from(b'a' + u8::try_from(i / 26).expect("index fits"));
    let low = char::from(b'a' + u8::try_from(i % 26).expect("index fits"));
    format!("q{high}{low}")
}

#[test]
fn test_output_is_capped_at_k() -> Result<()> {
    let dir = TempDir::new()?;
    let mut corpus = String::new();
    // Word i appears i + 1 times, so counts run 1..=250 with no ties.
    for i in 0..250 {
        for _ in 0..=i {
            corpus.push_str(&synthetic_word(i));
            corpus.push(' ');
        }
        corpus.push('\n');
    }
    let input = create_test_file(&dir, "big.txt", &corpus)?;
    let output = dir.path().join("ranked.txt");

    let written = run_pipeline(&input, &output)?;
    assert_eq!(written, K);

    let records = parse_output(&fs::read_to_string(&output)?);
    assert_eq!(records.len(), K);
    assert_eq!(records[0], (250, synthetic_word(249)));
    assert_eq!(records[K - 1].0, 51, "the cut line falls at count 51");
    Ok(())
}

#[test]
fn test_fewer_surviving_words_than_k() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_test_file(&dir, "small.txt", "fox market fox\n")?;
    let output = dir.path().join("ranked.txt");

    let written = run_pipeline(&input, &output)?;
    assert_eq!(written, 2, "output is not padded to K");

    assert_eq!(fs::read_to_string(&output)?, "2\tfox\n1\tmarket\n");
    Ok(())
}
