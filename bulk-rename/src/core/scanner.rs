// src/core/scanner.rs
pub mod utils;


use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::core::scanner::utils::is_target_file;

/// Collects every file under the configured target directories whose name
/// ends with the configured extension.
///
/// Target directories are visited in configuration order and each one is
/// walked with entries sorted by file name, so the result is deterministic.
/// A target directory that does not exist under the root is skipped. Entries
/// the walk cannot read are logged and skipped. Symlinked directories are
/// not followed; symlinks to files are kept.
///
/// # Arguments
///
/// * `config` - Root, target directories and extension filter to scan with
///
/// # Returns
///
/// * `Vec<PathBuf>` - Matching file paths, joined onto `config.root`
#[must_use]
pub fn collect_target_files(config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for dir in &config.target_dirs {
        let target = config.root.join(dir);
        if !target.is_dir() {
            debug!(dir = %target.display(), "target directory not found, skipping");
            continue;
        }

        for entry in WalkDir::new(&target).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };

            if is_target_file(&entry, config) {
                files.push(entry.into_path());
            }
        }
    }

    files
}
