//! Configuration for the loxt CLI.
//!
//! Settings come from `loxt.toml`. Command-line flags always win over the
//! file; the file only supplies defaults.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LoxtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "loxt.toml";

/// How scanned tokens are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND lexeme literal` line per token
    #[default]
    Text,
    /// A JSON array of token objects per input
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Scan-specific configuration.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Options for `loxt scan` and `loxt prompt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Output format for tokens.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the final EOF token.
    #[serde(default = "default_true")]
    pub show_eof: bool,

    /// Print the offending source line under each diagnostic.
    #[serde(default = "default_true")]
    pub snippets: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_eof: true,
            snippets: true,
        }
    }
}

impl Config {
    /// Load configuration from the first standard location that has one,
    /// falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::search_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LoxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Candidate locations, in search order: the working directory,
    /// `~/.config/loxt/`, then the platform config directory.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("loxt").join(CONFIG_FILE_NAME));
        }
        if let Some(config) = dirs::config_dir() {
            paths.push(config.join("loxt").join(CONFIG_FILE_NAME));
        }
        paths
    }
}
