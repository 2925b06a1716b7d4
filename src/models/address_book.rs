//! Address book: the insertion-ordered collection of contact records.

use crate::domain::{Name, ValidationError};
use crate::models::birthdays::{reporting_weekday, UpcomingBirthdays};
use crate::models::record::{BirthdayOutcome, Record};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Number of days, starting today, covered by the birthday report.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Contact records keyed by name.
///
/// Iteration follows insertion order. Replacing an existing name keeps the
/// position of the original entry; removing a name keeps the relative order
/// of the rest.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    /// Create a record with one phone and an optional birthday, replacing any
    /// record with the same name.
    ///
    /// An invalid name or phone is an error and leaves the book unchanged. An
    /// invalid birthday is not: the record is stored without one and the
    /// rejection is returned for display.
    pub fn add_record(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> Result<Option<BirthdayOutcome>, ValidationError> {
        let name = Name::new(name)?;

        let (mut record, outcome) = match birthday {
            Some(raw) => {
                let (record, outcome) = Record::with_birthday(name, raw);
                (record, Some(outcome))
            }
            None => (Record::new(name), None),
        };
        record.add_phone(phone)?;

        self.insert(record);
        Ok(outcome)
    }

    /// Insert a record, replacing any record with the same name.
    pub fn insert(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact-name lookup.
    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Exact-name lookup for mutation.
    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&i) => self.records.get_mut(i),
            None => None,
        }
    }

    /// Like `find_record_mut`, but a miss hands the book to `on_miss` to build
    /// the error.
    pub fn find_record_mut_or_else<E>(
        &mut self,
        name: &str,
        on_miss: impl FnOnce(&Self) -> E,
    ) -> Result<&mut Record, E> {
        match self.index.get(name).copied() {
            Some(i) => Ok(&mut self.records[i]),
            None => Err(on_miss(self)),
        }
    }

    /// Remove and return the record for `name`, if present.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let record = self.records.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        Some(record)
    }

    /// The entry that was inserted last (replacements keep their position).
    pub fn last_record(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Contacts whose next birthday falls within the seven days starting
    /// `today`, grouped by the weekday they are reported on.
    ///
    /// The next birthday is this year's anniversary, or next year's when
    /// this year's has already passed. Birthdays on a weekend are reported
    /// under Monday. A 29 February birthday is celebrated on 1 March in
    /// non-leap years.
    pub fn birthdays_due_this_week(&self, today: NaiveDate) -> UpcomingBirthdays {
        let mut upcoming = UpcomingBirthdays::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let Some(mut anniversary) = birthday.anniversary_in(today.year()) else {
                continue;
            };
            if anniversary < today {
                match birthday.anniversary_in(today.year() + 1) {
                    Some(next) => anniversary = next,
                    None => continue,
                }
            }

            let delta_days = (anniversary - today).num_days();
            if !(0..BIRTHDAY_WINDOW_DAYS).contains(&delta_days) {
                continue;
            }

            let weekday = reporting_weekday(anniversary.weekday());
            upcoming.push(weekday, record.name().as_str());
        }

        upcoming
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.insert(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, birthday) in entries {
            book.add_record(name, "0123456789", Some(birthday)).unwrap();
        }
        book
    }

    #[test]
    fn test_add_and_find_record() {
        let mut book = AddressBook::new();
        let outcome = book.add_record("Alice", "0123456789", None).unwrap();
        assert!(outcome.is_none());

        let record = book.find_record("Alice").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "0123456789");
    }

    #[test]
    fn test_add_record_invalid_phone_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        let err = book.add_record("Alice", "123", None).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("123".to_string()));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_record_empty_name() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.add_record("", "0123456789", None),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_add_record_bad_birthday_still_inserts() {
        let mut book = AddressBook::new();
        let outcome = book
            .add_record("Alice", "0123456789", Some("12-06-1990"))
            .unwrap()
            .unwrap();
        assert!(!outcome.is_updated());
        assert!(book.find_record("Alice").unwrap().birthday().is_none());
    }

    #[test]
    fn test_add_record_overwrites_without_merge() {
        let mut book = AddressBook::new();
        book.add_record("Alice", "1111111111", Some("12.06.1990")).unwrap();
        book.add_record("Bob", "2222222222", None).unwrap();
        book.add_record("Alice", "3333333333", None).unwrap();

        assert_eq!(book.len(), 2);
        let alice = book.find_record("Alice").unwrap();
        assert_eq!(alice.phones_joined(","), "3333333333");
        assert!(alice.birthday().is_none());
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_find_record_is_exact() {
        let mut book = AddressBook::new();
        book.add_record("Alice", "0123456789", None).unwrap();
        assert!(book.find_record("alice").is_none());
        assert!(book.find_record("Alic").is_none());
    }

    #[test]
    fn test_remove_record_keeps_order() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C", "D"] {
            book.add_record(name, "0123456789", None).unwrap();
        }

        assert!(book.remove_record("B").is_some());
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["A", "C", "D"]);
        assert!(book.find_record("D").is_some());
        assert!(book.find_record_mut("C").is_some());
    }

    #[test]
    fn test_remove_record_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record("A", "0123456789", None).unwrap();
        assert!(book.remove_record("Z").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_last_record() {
        let mut book = AddressBook::new();
        assert!(book.last_record().is_none());
        book.add_record("A", "0123456789", None).unwrap();
        book.add_record("B", "0123456789", None).unwrap();
        assert_eq!(book.last_record().unwrap().name().as_str(), "B");
    }

    #[test]
    fn test_birthday_midweek() {
        let book = book_with_birthdays(&[("Alice", "12.06.1990")]);
        let report = book.birthdays_due_this_week(date(2024, 6, 10));
        assert_eq!(report.get(Weekday::Wed), Some(&["Alice".to_string()][..]));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_birthday_on_weekend_moves_to_monday() {
        let book = book_with_birthdays(&[("Sam", "15.06.1990"), ("Sue", "16.06.1985")]);
        let report = book.birthdays_due_this_week(date(2024, 6, 10));
        assert_eq!(
            report.get(Weekday::Mon),
            Some(&["Sam".to_string(), "Sue".to_string()][..])
        );
        assert!(report.get(Weekday::Sat).is_none());
        assert!(report.get(Weekday::Sun).is_none());
    }

    #[test]
    fn test_window_boundaries() {
        let book = book_with_birthdays(&[
            ("Today", "10.06.1990"),
            ("SixDays", "16.06.1990"),
            ("SevenDays", "17.06.1990"),
            ("Yesterday", "09.06.1990"),
        ]);
        let report = book.birthdays_due_this_week(date(2024, 6, 10));

        let all: Vec<&String> = report.iter().flat_map(|(_, names)| names).collect();
        assert_eq!(all, vec!["Today", "SixDays"]);
    }

    #[test]
    fn test_year_rollover() {
        let book = book_with_birthdays(&[("Newyear", "02.01.1995")]);
        let report = book.birthdays_due_this_week(date(2024, 12, 30));
        // 2 January 2025 is a Thursday
        assert_eq!(report.get(Weekday::Thu), Some(&["Newyear".to_string()][..]));
    }

    #[test]
    fn test_leap_day_in_non_leap_year() {
        let book = book_with_birthdays(&[("Leap", "29.02.2000")]);

        // 1 March 2025 is a Saturday, reported on Monday
        let report = book.birthdays_due_this_week(date(2025, 2, 27));
        assert_eq!(report.get(Weekday::Mon), Some(&["Leap".to_string()][..]));

        // 29 February 2024 exists and is a Thursday
        let report = book.birthdays_due_this_week(date(2024, 2, 27));
        assert_eq!(report.get(Weekday::Thu), Some(&["Leap".to_string()][..]));
    }

    #[test]
    fn test_records_without_birthday_are_skipped() {
        let mut book = AddressBook::new();
        book.add_record("Nobody", "0123456789", None).unwrap();
        assert!(book.birthdays_due_this_week(date(2024, 6, 10)).is_empty());
    }

    #[test]
    fn test_same_weekday_keeps_book_order() {
        let book = book_with_birthdays(&[
            ("Zed", "12.06.2001"),
            ("Amy", "13.06.1999"),
            ("Bob", "12.06.1970"),
        ]);
        let report = book.birthdays_due_this_week(date(2024, 6, 10));
        assert_eq!(
            report.get(Weekday::Wed),
            Some(&["Zed".to_string(), "Bob".to_string()][..])
        );
        assert_eq!(report.to_string(), "Wednesday: Zed, Bob\nThursday: Amy");
    }

    #[test]
    fn test_from_iterator_last_write_wins() {
        let first = Record::new(Name::new("A").unwrap());
        let mut second = Record::new(Name::new("A").unwrap());
        second.add_phone("0123456789").unwrap();

        let book: AddressBook = vec![first, second].into_iter().collect();
        assert_eq!(book.len(), 1);
        assert_eq!(book.find_record("A").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_find_record_mut_or_else() {
        let mut book = AddressBook::new();
        book.add_record("Alice", "0123456789", None).unwrap();

        let record = book
            .find_record_mut_or_else("Alice", |_| "missing")
            .unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(book.find_record("Alice").unwrap().phones().len(), 2);

        let miss = book.find_record_mut_or_else("Bob", |b| b.names().count());
        assert_eq!(miss.unwrap_err(), 1);
    }
}
