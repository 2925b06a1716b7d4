//! Command-line interface: parsing, dispatch and the interactive loop.

pub mod commands;
pub mod dispatcher;
pub mod repl;

pub use commands::Command;
pub use dispatcher::{CommandDispatcher, Reply};
