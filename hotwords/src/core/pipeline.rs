// src/core/pipeline.rs
use anyhow::{Context as _, Result, bail};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead as _, BufReader};
use std::path::{Path, PathBuf};

use crate::core::aggregate::{accumulate, merge_counts};
use crate::core::rank::sort_descending;
use crate::core::staging::{read_records, write_records};
use crate::core::tokenize::tokenize_and_filter;
use crate::core::topk::{K, select_top_k};
use crate::models::{CountWord, WordCount};
use crate::utils::{collect_input_files, write_output};

/// Stage 1: word count. Each input file is one partition: its lines are
/// tokenized, filtered, and combined locally, then the partition totals are
/// merged into the global totals by key. The aggregated records are staged
/// for the sort stage.
///
/// # Arguments
///
/// * `inputs` - The input files, one partition each
/// * `counts_path` - Destination staging file for `(word, count)` records
///
/// # Returns
///
/// * `Ok(usize)` - The number of distinct words counted
///
/// # Errors
///
/// Returns an error if an input file cannot be opened or read, or the
/// staging file cannot be written.
pub fn count_stage(inputs: &[PathBuf], counts_path: &Path) -> Result<usize> {
    let mut totals: HashMap<String, u64> = HashMap::new();

    for path in inputs {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        let mut partition: HashMap<String, u64> = HashMap::new();

        for line in BufReader::new(file).lines() {
            let line = line
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            accumulate(&mut partition, tokenize_and_filter(&line));
        }

        merge_counts(&mut totals, partition);
    }

    let counts: Vec<WordCount> = totals
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    write_records(counts_path, &counts)?;
    Ok(counts.len())
}

/// Stage 2: global descending sort. Reads the staged counts, inverts each
/// record to `(count, word)`, and stages one globally ordered sequence.
///
/// # Errors
///
/// Returns an error if either staging file cannot be read or written.
pub fn sort_stage(counts_path: &Path, ranked_path: &Path) -> Result<usize> {
    let counts: Vec<WordCount> = read_records(counts_path)?;
    let ranked = sort_descending(counts);
    write_records(ranked_path, &ranked)?;
    Ok(ranked.len())
}

/// Stage 3: top-K selection. Consumes the ordered stream once, globally,
/// retains the first K records, and writes the final output file.
///
/// # Errors
///
/// Returns an error if the staging file cannot be read or the output file
/// cannot be written.
pub fn select_stage(ranked_path: &Path, output: &Path) -> Result<usize> {
    let ranked: Vec<CountWord> = read_records(ranked_path)?;
    let top = select_top_k(ranked, K);
    write_output(output, &top)?;
    Ok(top.len())
}

/// Runs the three stages in sequence. Each stage must complete before the
/// next starts; a failure aborts the run and no output is promoted (the
/// output file only comes into existence in stage 3).
///
/// # Arguments
///
/// * `input` - Input text file, or directory of text files
/// * `output` - Destination file; must not already exist
///
/// # Returns
///
/// * `Ok(usize)` - The number of records written to the output file
///
/// # Errors
///
/// Returns an error if the output file already exists, the input path
/// cannot be enumerated, or any stage fails.
pub fn run_pipeline(input: &Path, output: &Path) -> Result<usize> {
    if output.exists() {
        bail!("Output path already exists: {}", output.display());
    }

    let inputs = collect_input_files(input)?;
    log::info!("counting words across {} input file(s)", inputs.len());

    let counts_dir = tempfile::Builder::new()
        .prefix("hotwords-counts-")
        .tempdir()
        .context("Failed to create staging directory")?;
    let ranked_dir = tempfile::Builder::new()
        .prefix("hotwords-ranked-")
        .tempdir()
        .context("Failed to create staging directory")?;
    let counts_path = counts_dir.path().join("part-00000");
    let ranked_path = ranked_dir.path().join("part-00000");

    let distinct = count_stage(&inputs, &counts_path)?;
    log::info!("word count stage complete: {distinct} distinct words");

    let ranked = sort_stage(&counts_path, &ranked_path)?;
    log::info!("sort stage complete: {ranked} ranked records");

    let written = select_stage(&ranked_path, output)?;
    log::info!(
        "top-{K} selection complete: {written} records written to {}",
        output.display()
    );

    Ok(written)
}
