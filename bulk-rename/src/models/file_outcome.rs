// src/models/file_outcome.rs
use std::path::{Path, PathBuf};

use crate::error::RenameError;

/// What happened to one file during a run.
#[derive(Debug)]
pub enum FileOutcome {
    /// Contents changed and were written back.
    Updated(PathBuf),
    /// No replacement key matched; the file was not opened for writing.
    Unchanged(PathBuf),
    Failed { path: PathBuf, error: RenameError },
}

impl FileOutcome {
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Updated(path) | Self::Unchanged(path) | Self::Failed { path, .. } => path,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The console line for this outcome, if it produces one.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Updated(path) => Some(format!("Updated: {}", path.display())),
            Self::Unchanged(_) => None,
            Self::Failed { path, error } => Some(format!(
                "Error updating {}: {}",
                path.display(),
                error.detail()
            )),
        }
    }
}
