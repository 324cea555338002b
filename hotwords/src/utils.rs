// src/utils.rs
use anyhow::{Context as _, Result, bail};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::models::CountWord;

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        // Leading '_' marks engine-reserved files (markers, logs)
        s.starts_with('.') || s.starts_with('_')
    })
}

/// Collects the input files for a run.
///
/// A file path yields itself. A directory is walked recursively, gathering
/// regular files and skipping hidden entries; the result is sorted so
/// partition order is deterministic.
///
/// # Arguments
///
/// * `path` - Input text file, or directory of text files
///
/// # Errors
///
/// This function may return an error if:
/// * The input path does not exist
/// * File system operations fail during traversal
pub fn collect_input_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("Input path does not exist: {}", path.display());
    }

    let absolute_dir = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Writes the final ranking, one `<count><TAB><word>` line per record, in
/// the given order.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_output(path: &Path, ranked: &[CountWord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for record in ranked {
        writeln!(writer, "{}\t{}", record.count, record.word)?;
    }

    writer.flush()?;
    Ok(())
}
