//! Error types for ahora

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diary dashboard
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Invalid date: {0}")]
    DateParse(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Not an ahora site directory: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Front matter error in {path}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotSiteDirectory(_) => 2,
            DiaryError::DateParse(_) | DiaryError::InvalidSelection(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotSiteDirectory(path) => {
                format!(
                    "Not an ahora site directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'ahora init' in this directory to create site.toml\n\
                    • Navigate to a directory containing site.toml\n\
                    • Set AHORA_ROOT environment variable to your site path",
                    path.display()
                )
            }
            DiaryError::DateParse(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates must be calendar dates in YYYY-MM-DD form.\n\
                    Check the 'date:' line of your diary front matter, e.g.\n\
                    date: 2025-01-17",
                    value
                )
            }
            DiaryError::InvalidSelection(msg) => {
                format!(
                    "Invalid selection: {}\n\n\
                    Suggestions:\n\
                    • Run 'ahora timeline' to see available weeks and days\n\
                    • Use --all to show every entry",
                    msg
                )
            }
            DiaryError::Frontmatter { path, message } => {
                format!(
                    "Could not read front matter of {}: {}\n\n\
                    Diary entries must start with a YAML block:\n\
                    ---\n\
                    title: Day 1\n\
                    date: 2025-01-17\n\
                    ---",
                    path.display(),
                    message
                )
            }
            DiaryError::Config(msg) => {
                if msg.contains("counters_mode") {
                    format!(
                        "{}\n\n\
                        Valid counter modes: entries, calendar\n\
                        Example: ahora config counters_mode calendar",
                        msg
                    )
                } else if msg.contains("project_start") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD or 'none'\n\
                        Example: ahora config project_start 2025-08-20",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
