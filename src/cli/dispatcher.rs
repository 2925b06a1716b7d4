//! Command dispatcher.
//!
//! Runs parsed commands against the address book and renders the reply
//! text. Nothing here prints; the REPL decides what to do with replies.

use crate::cli::commands::{Command, USAGE};
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::matching::NameMatcher;
use crate::models::{AddressBook, Record};
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Text to show the user and whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: true,
        }
    }
}

/// Owns the address book for the length of a session and applies commands
/// to it.
pub struct CommandDispatcher {
    book: AddressBook,
    matcher: NameMatcher,
    max_suggestions: usize,
    match_threshold: u8,
    today: Option<NaiveDate>,
}

impl CommandDispatcher {
    pub fn new(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            matcher: NameMatcher::new(),
            max_suggestions: config.max_name_suggestions,
            match_threshold: config.name_match_threshold,
            today: None,
        }
    }

    /// Use a fixed date for the birthday report instead of the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Parse and run one input line. Returns `None` for a blank line.
    ///
    /// Errors are rendered into the reply; they never end the session.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let result = match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => return None,
            Err(e) => Err(e),
        };

        Some(result.unwrap_or_else(|e| {
            debug!("Command failed: {}", e);
            Reply::text(e.to_string())
        }))
    }

    /// Run one parsed command.
    pub fn execute(&mut self, command: Command) -> CommandResult<Reply> {
        debug!("Executing {:?}", command);

        let reply = match command {
            Command::Hello => Reply::text("How can I help you?"),
            Command::Help => Reply::text(Self::help_text()),
            Command::Exit => Reply::exit("Good bye!"),
            Command::Add {
                name,
                phone,
                birthday,
            } => {
                let outcome = self.book.add_record(&name, &phone, birthday.as_deref())?;
                let mut text = match self.book.find_record(&name) {
                    Some(record) => format!("Last added record {}", record),
                    None => format!("Last added record {}", name),
                };
                if let Some(outcome) = outcome {
                    text.push('\n');
                    text.push_str(&outcome.to_string());
                }
                Reply::text(text)
            }
            Command::Find { name } => Reply::text(self.record(&name)?.to_string()),
            Command::Remove { name } => match self.book.remove_record(&name) {
                Some(_) => Reply::text(format!("Record {} removed.", name)),
                None => return Err(self.not_found(&name)),
            },
            Command::All => {
                if self.book.is_empty() {
                    Reply::text("Address book is empty.")
                } else {
                    let lines: Vec<String> = self.book.iter().map(Record::summary_line).collect();
                    Reply::text(lines.join("\n"))
                }
            }
            Command::AddPhone { name, phone } => {
                let record = self.record_mut(&name)?;
                record.add_phone(&phone)?;
                Reply::text(format!(
                    "Phone added. Phones of {}: {}",
                    record.name(),
                    record.phones_joined(", ")
                ))
            }
            Command::EditPhone {
                name,
                old_phone,
                new_phone,
            } => {
                let record = self.record_mut(&name)?;
                if record.edit_phone(&old_phone, &new_phone)? {
                    Reply::text(format!("Phone number for {} has been updated.", name))
                } else {
                    Reply::text(format!("Phone {} not found for {}.", old_phone, name))
                }
            }
            Command::RemovePhone { name, phone } => {
                let record = self.record_mut(&name)?;
                if record.remove_phone(&phone) {
                    Reply::text("Phone removed.")
                } else {
                    Reply::text(format!("Phone {} not found for {}.", phone, name))
                }
            }
            Command::AddBirthday { name, birthday } => {
                let record = self.record_mut(&name)?;
                Reply::text(record.set_birthday(&birthday).to_string())
            }
            Command::ShowBirthday { name } => Reply::text(self.record(&name)?.describe_birthday()),
            Command::Birthdays => {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                let upcoming = self.book.birthdays_due_this_week(today);
                if upcoming.is_empty() {
                    Reply::text("No birthdays in the next 7 days.")
                } else {
                    Reply::text(upcoming.to_string())
                }
            }
        };

        Ok(reply)
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .find_record(name)
            .ok_or_else(|| self.not_found(name))
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        let Self {
            book,
            matcher,
            max_suggestions,
            match_threshold,
            ..
        } = self;
        book.find_record_mut_or_else(name, |book| {
            not_found(matcher, book, name, *max_suggestions, *match_threshold)
        })
    }

    fn not_found(&self, name: &str) -> CommandError {
        not_found(
            &self.matcher,
            &self.book,
            name,
            self.max_suggestions,
            self.match_threshold,
        )
    }

    fn help_text() -> String {
        let mut text = String::from("Available commands:");
        for (_, usage) in USAGE {
            text.push_str("\n  ");
            text.push_str(usage);
        }
        text
    }
}

/// Lookup-miss error with "did you mean" suggestions from `book`.
fn not_found(
    matcher: &NameMatcher,
    book: &AddressBook,
    name: &str,
    max_suggestions: usize,
    match_threshold: u8,
) -> CommandError {
    CommandError::RecordNotFound {
        name: name.to_string(),
        suggestions: matcher.suggest(name, book.names(), max_suggestions, match_threshold),
    }
}
