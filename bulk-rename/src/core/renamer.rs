// src/core/renamer.rs
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::replace::apply_replacements;
use crate::core::scanner::collect_target_files;
use crate::error::RenameError;
use crate::models::{FileOutcome, RenameReport, Replacement};

/// Rewrites a single file in place.
///
/// The file is read fully as UTF-8 and closed before anything is written.
/// It is only reopened (truncating) when the replacements actually changed
/// its contents; the new text is written byte-for-byte, with no newline
/// translation.
///
/// # Arguments
///
/// * `path` - The file to rewrite
/// * `replacements` - Ordered literal substitutions
///
/// # Returns
///
/// * `Ok(FileOutcome::Updated)` - The file was rewritten
/// * `Ok(FileOutcome::Unchanged)` - No key matched, the file was left alone
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read or is not valid UTF-8
/// * The file cannot be written back
pub fn rename_file(path: &Path, replacements: &[Replacement]) -> Result<FileOutcome, RenameError> {
    let content = fs::read_to_string(path).map_err(|source| RenameError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let new_content = apply_replacements(&content, replacements);
    if new_content == content {
        return Ok(FileOutcome::Unchanged(path.to_path_buf()));
    }

    fs::write(path, new_content.as_bytes()).map_err(|source| RenameError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileOutcome::Updated(path.to_path_buf()))
}

/// Runs [`rename_file`] over every matching file under the configured
/// target directories. Per-file failures are recorded in the report and
/// never stop the run.
#[must_use]
pub fn rename_tree(config: &Config) -> RenameReport {
    let mut report = RenameReport::new();

    for path in collect_target_files(config) {
        debug!(path = %path.display(), "processing");
        let outcome = match rename_file(&path, &config.replacements) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to update file");
                FileOutcome::Failed { path, error }
            }
        };
        if outcome.is_updated() {
            info!(path = %outcome.path().display(), "updated");
        }
        report.push(outcome);
    }

    debug!(
        total = report.total_files(),
        updated = report.updated_count(),
        failed = report.failed_count(),
        "run complete"
    );
    report
}
