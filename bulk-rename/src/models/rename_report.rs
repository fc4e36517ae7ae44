// src/models/rename_report.rs
use std::io::{self, Write};
use std::path::Path;

use crate::models::FileOutcome;

/// Ordered record of every file a run visited.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RenameReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    #[inline]
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.outcomes.len()
    }

    pub fn updated(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|o| o.is_updated())
            .map(FileOutcome::path)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    #[inline]
    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.updated().count()
    }

    #[inline]
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Console lines in processing order; unchanged files contribute nothing.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.outcomes.iter().filter_map(FileOutcome::notice).collect()
    }

    /// Writes `Updated:` lines to `out` and `Error updating` lines to `err`,
    /// in processing order.
    ///
    /// # Errors
    ///
    /// Returns an error if either writer fails.
    pub fn write_to(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        for outcome in &self.outcomes {
            let Some(line) = outcome.notice() else {
                continue;
            };
            if outcome.is_failed() {
                writeln!(err, "{line}")?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }

    /// Prints the report to stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written to.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock(), &mut io::stderr().lock())
    }
}
