// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to process a single file. Never aborts a run.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    /// The underlying I/O error message, without the path prefix.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source.to_string(),
        }
    }
}
