//! Error types for the loxt CLI.
//!
//! Lexical errors are not represented here one by one: they are rendered as
//! diagnostics while scanning, and only their total reaches this layer as
//! [`LoxtError::ScanFailed`].

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for input that scanned with errors (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;

/// Exit status for unreadable input or unwritable output (`EX_IOERR`).
pub const EXIT_IO_ERROR: u8 = 74;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Main error type for the loxt CLI application.
#[derive(Error, Debug)]
pub enum LoxtError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source file could not be read.
    #[error("Could not read {}: {source}", .path.display())]
    ReadSource {
        /// File that failed to load
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Any other IO failure, typically writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of the token stream failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Scanning finished but reported lexical errors.
    #[error("{errors} lexical error(s) reported")]
    ScanFailed {
        /// Total number of errors across all scanned inputs
        errors: usize,
    },
}

impl LoxtError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoxtError::ScanFailed { .. } => EXIT_DATA_ERROR,
            LoxtError::ReadSource { .. } | LoxtError::Io(_) => EXIT_IO_ERROR,
            LoxtError::Config(_)
            | LoxtError::Json(_)
            | LoxtError::Toml(_) => EXIT_FAILURE,
        }
    }
}

/// Result type alias using LoxtError.
pub type Result<T> = std::result::Result<T, LoxtError>;
