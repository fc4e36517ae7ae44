// src/models.rs
pub mod file_outcome;
pub mod rename_report;
pub mod replacement;

pub use file_outcome::FileOutcome;
pub use rename_report::RenameReport;
pub use replacement::Replacement;
