//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally loaded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the address book file.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Configuration for the address book CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is loaded from and saved to
    pub book_path: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Maximum number of "did you mean" names offered on a lookup miss (default: 3)
    pub max_name_suggestions: usize,

    /// Minimum fuzzy match confidence for a suggestion (0-100, default: 60)
    pub name_match_threshold: u8,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: File to load and save (default: "address_book.json")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `MAX_NAME_SUGGESTIONS`: Max suggested names on a miss (default: 3)
    /// - `NAME_MATCH_THRESHOLD`: Min suggestion confidence (default: 60)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.book_path,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let max_name_suggestions =
            Self::parse_env_usize("MAX_NAME_SUGGESTIONS", defaults.max_name_suggestions)?;
        let name_match_threshold =
            Self::parse_env_u8("NAME_MATCH_THRESHOLD", defaults.name_match_threshold)?;

        if name_match_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "NAME_MATCH_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        Ok(Config {
            book_path,
            log_level,
            max_name_suggestions,
            name_match_threshold,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            log_level: "warn".to_string(),
            max_name_suggestions: 3,
            name_match_threshold: 60,
        }
    }
}
