// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, load_config_file};
use crate::core::renamer::rename_tree;
use crate::utils::absolute_path;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project root holding the target directories (defaults to current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// TOML file overriding target directories, extension and replacements
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Builds the run configuration: built-in defaults, then the config file,
/// then `--root`. The root is resolved to an absolute path.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The current directory cannot be resolved for a relative root
pub fn build_config(args: &Args) -> Result<Config> {
    let mut config = Config::default();
    if let Some(path) = &args.config {
        config = config.merge(load_config_file(path)?);
    }
    if let Some(root) = &args.root {
        config.root.clone_from(root);
    }
    config.root = absolute_path(&config.root)?;
    Ok(config)
}

/// Runs the renamer and prints one line per updated or failed file.
///
/// # Errors
///
/// Fails when the configuration cannot be built or the console cannot be
/// written to; per-file failures are printed and do not affect the result.
pub fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let report = rename_tree(&config);
    report.print().context("Failed to write report")?;
    Ok(())
}
