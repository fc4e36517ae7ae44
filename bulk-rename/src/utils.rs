// src/utils.rs
use anyhow::{Context as _, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolves `dir` against the current working directory when it is relative.
///
/// # Errors
///
/// Returns an error if the current working directory cannot be determined.
pub fn absolute_path(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(dir))
}
