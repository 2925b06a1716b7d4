//! Address Book - a command-line contact manager.
//!
//! Stores contact names, phone numbers and birthdays, reports the birthdays
//! coming up in the next seven days, and keeps the data in a JSON file
//! between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: Contact records, the address book and the birthday report
//! - **matching**: Fuzzy "did you mean" suggestions for contact names
//! - **repositories**: Loading and saving the address book
//! - **cli**: Command parsing, dispatch and the interactive loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;

pub use cli::{Command, CommandDispatcher, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StoreError};
pub use matching::{NameMatch, NameMatcher};
pub use models::{AddressBook, BirthdayOutcome, Record, UpcomingBirthdays};
pub use repositories::{AddressBookStore, JsonFileStore};
