//! Fuzzy name matching.
//!
//! Suggests existing contact names when an exact lookup misses.

pub mod name_matcher;

pub use name_matcher::{NameMatch, NameMatcher};
