// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input text file, or directory of newline-delimited text files
    pub input: PathBuf,

    /// Destination file for the ranked word counts (must not exist yet)
    pub output: PathBuf,
}
