//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of trying to set a record's birthday.
///
/// Setting a birthday never fails: a bad value is reported back through
/// [`BirthdayOutcome::Rejected`] and the previous birthday is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayOutcome {
    /// The birthday was parsed and stored.
    Updated { name: Name, birthday: Birthday },

    /// The input could not be parsed as `DD.MM.YYYY`.
    Rejected { input: String },
}

impl BirthdayOutcome {
    /// Whether the birthday was stored.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

impl fmt::Display for BirthdayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated { name, birthday } => {
                write!(f, "Birthday of {} is {}.", name, birthday)
            }
            Self::Rejected { input } => write!(
                f,
                "Wrong data for birthday {}. Please enter it in format DD.MM.YYYY",
                input
            ),
        }
    }
}

/// A contact: a name, an ordered list of phone numbers and an optional
/// birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record and try to set its birthday.
    ///
    /// The record is created even when the birthday is rejected.
    pub fn with_birthday(name: Name, birthday: &str) -> (Self, BirthdayOutcome) {
        let mut record = Self::new(name);
        let outcome = record.set_birthday(birthday);
        (record, outcome)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Parse and store a birthday given as `DD.MM.YYYY`.
    ///
    /// Parse failures are swallowed into the returned outcome, unlike
    /// [`Record::add_phone`] which propagates its validation error.
    pub fn set_birthday(&mut self, raw: &str) -> BirthdayOutcome {
        match Birthday::parse(raw) {
            Ok(birthday) => {
                self.birthday = Some(birthday);
                BirthdayOutcome::Updated {
                    name: self.name.clone(),
                    birthday,
                }
            }
            Err(_) => BirthdayOutcome::Rejected {
                input: raw.to_string(),
            },
        }
    }

    /// Human-readable description of the known (or unknown) birthday.
    pub fn describe_birthday(&self) -> String {
        match self.birthday {
            Some(birthday) => format!("Birthday of {} is {}", self.name, birthday),
            None => format!("We don't know birthday of {}", self.name),
        }
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// Returns `false` (and changes nothing) when no phone matches.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before the lookup, so an invalid replacement is
    /// rejected even when `old` is absent. Returns `Ok(false)` when no phone
    /// matches `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = Phone::new(new)?;

        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                *phone = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Phones joined with `sep`.
    pub fn phones_joined(&self, sep: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// One-line summary used when listing the whole book.
    pub fn summary_line(&self) -> String {
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "None".to_string());
        format!(
            "Name: {}, Phones: {}, Birthday: {}",
            self.name,
            self.phones_joined(", "),
            birthday
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined("; ")
        )
    }
}
