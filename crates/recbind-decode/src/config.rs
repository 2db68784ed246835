//! # Scan Configuration
//!
//! Record format conventions the scanner and binder rely on. The defaults
//! describe the stock record layout:
//!
//! ```text
//! <header line, ignored>
//! "title": "Acme Works"
//! departments: [Casting, Assembly]
//! ---
//! ```
//!
//! A config can be loaded from YAML; every field is optional and unknown
//! fields are rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or checking a [`ScanConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config '{}': {source}", .path.display())]
    Io {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid YAML or has unknown fields.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The config parsed but describes an unusable format.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Record format conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Leading lines skipped in every record file.
    pub header_lines: usize,
    /// A line exactly equal to this ends the record.
    pub terminator: String,
    /// Key/value delimiter. Only the first occurrence on a line splits.
    pub delimiter: char,
    /// Quote character stripped from both ends of keys and values.
    pub quote: char,
    /// Opening list bracket, stripped from list values.
    pub list_open: char,
    /// Closing list bracket, stripped from list values.
    pub list_close: char,
    /// List item separator, stripped from list values.
    pub list_separator: char,
    /// Only files with this extension are scanned, when set.
    pub extension: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            header_lines: 1,
            terminator: "---".to_string(),
            delimiter: ':',
            quote: '"',
            list_open: '[',
            list_close: ']',
            list_separator: ',',
            extension: None,
        }
    }
}

impl ScanConfig {
    /// Parse and check a YAML config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed YAML or unknown fields,
    /// and [`ConfigError::Invalid`] if [`ScanConfig::validate`] fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and check a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
    /// as [`ScanConfig::from_yaml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Reject conventions the scanner cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminator.is_empty() {
            return Err(ConfigError::Invalid("terminator must not be empty".to_string()));
        }
        if self.delimiter.is_whitespace() {
            return Err(ConfigError::Invalid(
                "delimiter must not be whitespace".to_string(),
            ));
        }
        if self.list_open == self.list_close {
            return Err(ConfigError::Invalid(format!(
                "list_open and list_close must differ, both are '{}'",
                self.list_open
            )));
        }
        if self.extension.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::Invalid("extension must not be empty".to_string()));
        }
        Ok(())
    }

    /// Whether `path` passes the extension filter.
    pub fn accepts(&self, path: &Path) -> bool {
        match self.extension.as_deref() {
            None => true,
            Some(wanted) => {
                let wanted = wanted.trim_start_matches('.');
                path.extension().and_then(|e| e.to_str()) == Some(wanted)
            }
        }
    }
}
