//! Data models for the address book.
//!
//! This module contains the contact record, the address book that holds
//! the records, and the weekly birthday report derived from it.

pub mod address_book;
pub mod birthdays;
pub mod record;

pub use address_book::{AddressBook, BIRTHDAY_WINDOW_DAYS};
pub use birthdays::{weekday_name, UpcomingBirthdays};
pub use record::{BirthdayOutcome, Record};
