//! Error types for the menu-loader crate.
//!
//! Every failure here happens at startup, before the service accepts
//! requests, so callers usually wrap these in `anyhow` and abort.

use thiserror::Error;

/// Errors that can occur while loading and validating a menu file
#[derive(Error, Debug)]
pub enum MenuLoadError {
    /// Menu file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The menu file is not a JSON array of dishes
    #[error("Parse error in {path}: {reason}")]
    ParseError { path: String, reason: String },

    /// A dish had an invalid value for one of its fields
    #[error("Invalid value for {field} of dish #{position}: {value:?}")]
    InvalidValue {
        field: String,
        position: usize,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MenuLoadError>;
