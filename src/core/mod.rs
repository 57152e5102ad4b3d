use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the autowallpaper application.
///
/// Covers everything that can stop the process from reaching the scheduler
/// loop. Once the loop runs, failures are reported per cycle instead.
#[derive(Error, Debug)]
pub enum AutowallpaperError {
    /// No configuration could be obtained from the CLI, disk or the user
    #[error("no wallpaper configuration available: {0}")]
    ConfigUnavailable(String),

    /// A configuration field failed validation
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig {
        /// The field that is invalid
        field: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParse {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Writing the configuration record failed
    #[error("failed to persist config to '{path}': {details}")]
    Persistence {
        /// Path where persistence failed
        path: PathBuf,
        /// Error details from the persistence operation
        details: String,
    },

    /// The background instance could not be started
    #[error("failed to spawn background instance: {0}")]
    Spawn(String),

    /// Logging could not be initialised
    #[error("failed to initialise logging: {0}")]
    Tracing(String),
}

/// A specialized `Result` type for autowallpaper operations.
pub type Result<T> = result::Result<T, AutowallpaperError>;

impl AutowallpaperError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        AutowallpaperError::TomlParse {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a persistence error for the given path.
    pub fn persistence(error: impl fmt::Display, path: &Path) -> Self {
        AutowallpaperError::Persistence {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a validation error for a named field.
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        AutowallpaperError::InvalidConfig {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
