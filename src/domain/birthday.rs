//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format accepted from user input.
pub const INPUT_FORMAT: &str = "%d.%m.%Y";

/// Format used for display and storage.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// A contact's date of birth.
///
/// Parsed strictly from `DD.MM.YYYY` and displayed as ISO `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::parse("12.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "1990-06-12");
/// assert_eq!(birthday.to_input_format(), "12.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// Day and month must be zero-padded to two digits and the year must
    /// have four digits. The date must exist in the calendar.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for any other input.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(raw.to_string());

        if !Self::has_input_shape(raw) {
            return Err(invalid());
        }

        let day: u32 = raw[0..2].parse().map_err(|_| invalid())?;
        let month: u32 = raw[3..5].parse().map_err(|_| invalid())?;
        let year: i32 = raw[6..10].parse().map_err(|_| invalid())?;

        if year < 1 {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// `DD.MM.YYYY` with ASCII digits only.
    fn has_input_shape(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'.',
                _ => b.is_ascii_digit(),
            })
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Render back in the input format, `DD.MM.YYYY`.
    pub fn to_input_format(&self) -> String {
        self.0.format(INPUT_FORMAT).to_string()
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 1 March in non-leap years. Returns
    /// `None` only when `year` is outside the supported calendar range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.format(DISPLAY_FORMAT).to_string().serialize(serializer)
    }
}

// Stored birthdays use the ISO form, not the input form
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DISPLAY_FORMAT)
            .map(Self)
            .map_err(|e| serde::de::Error::custom(format!("invalid birthday '{}': {}", s, e)))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
