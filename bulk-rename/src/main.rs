// src/main.rs
use anyhow::Result;
use bulk_rename::{Args, logging::init_logging, run};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    run(args)
}
