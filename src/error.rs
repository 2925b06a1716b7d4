//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation of individual fields lives in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or holds invalid values
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file was written by an unknown format version
    #[error("Unsupported address book format version {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors reported back to the user by the command dispatcher.
///
/// None of these end the session.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command needs more arguments than were given
    #[error("Not enough arguments for {command}. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The first word is not a known command
    #[error("Unknown command '{0}'. Type 'help' to see available commands.")]
    UnknownCommand(String),

    /// A phone, name or birthday failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No record with this exact name
    #[error("No such name in the records: {name}{}", format_suggestions(.suggestions))]
    RecordNotFound {
        name: String,
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
