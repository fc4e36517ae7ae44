// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use cli::{Args, build_config, run};
pub use config::{Config, ConfigFile, load_config_file};
pub use crate::core::renamer::{rename_file, rename_tree};
pub use crate::core::replace::apply_replacements;
pub use crate::core::scanner::collect_target_files;
pub use error::RenameError;
pub use models::{FileOutcome, RenameReport, Replacement};
