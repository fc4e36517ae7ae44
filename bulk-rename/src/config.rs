// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Replacement;

pub const DEFAULT_TARGET_DIRS: [&str; 2] = ["lib", "test"];
pub const DEFAULT_EXTENSION: &str = ".dart";

/// Built-in replacement table, applied top to bottom.
pub const DEFAULT_REPLACEMENTS: [(&str, &str); 4] = [
    ("package:zovetica/", "package:pets_and_vets/"),
    ("Zovetica", "Pets & Vets"),
    ("zovetica", "pets_and_vets"),
    ("paw_logo.png", "logo.png"),
];

/// Everything a run needs, constructed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub target_dirs: Vec<String>,
    pub extension: String,
    pub replacements: Vec<Replacement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            target_dirs: DEFAULT_TARGET_DIRS.iter().map(|&d| d.to_owned()).collect(),
            extension: DEFAULT_EXTENSION.to_owned(),
            replacements: DEFAULT_REPLACEMENTS
                .iter()
                .map(|&(from, to)| Replacement::new(from, to))
                .collect(),
        }
    }
}

impl Config {
    /// Default configuration rooted at `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Overlays the keys present in `file` onto `self`.
    #[must_use]
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(root) = file.root {
            self.root = root;
        }
        if let Some(target_dirs) = file.target_dirs {
            self.target_dirs = target_dirs;
        }
        if let Some(extension) = file.extension {
            self.extension = extension;
        }
        if let Some(replacements) = file.replacements {
            self.replacements = replacements;
        }
        self
    }

    /// Whether a file name passes the extension filter.
    #[inline]
    #[must_use]
    pub fn matches_extension(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}

/// On-disk TOML form of [`Config`]; every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root: Option<PathBuf>,
    pub target_dirs: Option<Vec<String>>,
    pub extension: Option<String>,
    pub replacements: Option<Vec<Replacement>>,
}

/// Reads and parses a TOML config file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The contents are not valid TOML or contain unknown keys
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
