// src/core/scanner/utils.rs
use crate::config::Config;

/// Determines if a directory entry is a file the renamer should process:
/// a file, or a symlink to one, whose name ends with the configured
/// extension. Symlinked directories are never descended into by the walk.
///
/// # Arguments
/// * `entry` - The directory entry to check
/// * `config` - Supplies the extension filter
///
/// # Returns
/// `true` if the entry should be processed, `false` otherwise
pub fn is_target_file(entry: &walkdir::DirEntry, config: &Config) -> bool {
    config.matches_extension(&entry.file_name().to_string_lossy()) && entry.path().is_file()
}
