// src/main.rs
use anyhow::Result;
use clap::Parser;

use hotwords::{Args, run};

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();
    run(args)
}
