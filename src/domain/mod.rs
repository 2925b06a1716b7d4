//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the scalar fields of a
//! contact: its name, phone numbers and birthday. Each value object
//! validates at construction time so invalid data cannot be represented
//! in the address book.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
