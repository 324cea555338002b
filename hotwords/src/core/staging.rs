// src/core/staging.rs
use anyhow::{Context as _, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead as _, BufReader, BufWriter, Write as _};
use std::path::Path;

/// Writes intermediate records between pipeline stages, one JSON record per
/// line. The format round-trips u64 counts and arbitrary word strings
/// exactly, which is the only hard requirement on staging.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create staging file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)
            .with_context(|| format!("Failed to write staging record to {}", path.display()))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads back a staging file written by [`write_records`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record is malformed.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open staging file: {}", path.display()))?;
    let mut records = Vec::new();

    for line in BufReader::new(file).lines() {
        let line =
            line.with_context(|| format!("Failed to read staging file: {}", path.display()))?;
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("Malformed staging record in {}", path.display()))?;
        records.push(record);
    }

    Ok(records)
}
