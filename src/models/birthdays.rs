//! Weekly birthday report.

use chrono::Weekday;
use std::fmt;

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday a birthday is reported under. Weekends move to Monday.
pub fn reporting_weekday(weekday: Weekday) -> Weekday {
    match weekday {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        other => other,
    }
}

/// Contact names with a birthday in the coming week, grouped by weekday.
///
/// Buckets appear in the order their first contact was added; names inside
/// a bucket keep address book order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    buckets: Vec<(Weekday, Vec<String>)>,
}

impl UpcomingBirthdays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` to the bucket for `weekday`, creating it if needed.
    pub fn push(&mut self, weekday: Weekday, name: impl Into<String>) {
        let name = name.into();
        match self.buckets.iter_mut().find(|(day, _)| *day == weekday) {
            Some((_, names)) => names.push(name),
            None => self.buckets.push((weekday, vec![name])),
        }
    }

    /// Names reported under `weekday`, if any.
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|(day, _)| *day == weekday)
            .map(|(_, names)| names.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of contacts across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, names)| names.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.buckets
            .iter()
            .map(|(day, names)| (*day, names.as_slice()))
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(day, names)| format!("{}: {}", weekday_name(day), names.join(", ")))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
