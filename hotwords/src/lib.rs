// src/lib.rs
use anyhow::Result;

pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::Args;
pub use crate::core::pipeline::{count_stage, run_pipeline, select_stage, sort_stage};
pub use crate::core::rank::{rank_order, sort_descending};
pub use crate::core::stopwords::{StopWordSet, stop_words};
pub use crate::core::tokenize::tokenize_and_filter;
pub use crate::core::topk::{K, select_top_k};
pub use crate::models::{CountWord, WordCount};

/// Runs the full pipeline for parsed command-line arguments.
///
/// # Errors
///
/// Returns an error if any pipeline stage fails; the process then exits
/// with a failure status.
pub fn run(args: Args) -> Result<()> {
    run_pipeline(&args.input, &args.output)?;
    Ok(())
}
