//! Parsing of input lines into commands.

use crate::error::{CommandError, CommandResult};

/// A parsed user command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Find {
        name: String,
    },
    Remove {
        name: String,
    },
    All,
    AddPhone {
        name: String,
        phone: String,
    },
    EditPhone {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Exit,
}

/// Command names with their usage, in the order shown by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("hello", "hello"),
    ("add", "add <name> <phone> [DD.MM.YYYY]"),
    ("find", "find <name>"),
    ("remove", "remove <name>"),
    ("all", "all"),
    ("addphone", "addphone <name> <phone>"),
    ("editphone", "editphone <name> <old phone> <new phone>"),
    ("remove_phone", "remove_phone <name> <phone>"),
    ("addbirthday", "addbirthday <name> <DD.MM.YYYY>"),
    ("show_birthday", "show_birthday <name>"),
    ("birthdays", "birthdays"),
    ("help", "help"),
    ("exit", "exit | close"),
];

fn usage(command: &'static str) -> &'static str {
    USAGE
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, usage)| *usage)
        .unwrap_or(command)
}

/// Positional arguments of one command.
struct Args<'a> {
    command: &'static str,
    values: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn required(&self, index: usize) -> CommandResult<String> {
        self.values
            .get(index)
            .map(|v| v.to_string())
            .ok_or(CommandError::MissingArguments {
                command: self.command,
                usage: usage(self.command),
            })
    }

    fn optional(&self, index: usize) -> Option<String> {
        self.values.get(index).map(|v| v.to_string())
    }
}

impl Command {
    /// Parse one input line.
    ///
    /// Words are separated by whitespace and the command word is
    /// case-insensitive. Returns `Ok(None)` for a blank line. Extra
    /// arguments are ignored.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let word = first.to_lowercase();
        let values: Vec<&str> = words.collect();

        let args = |command: &'static str| Args {
            command,
            values: values.clone(),
        };

        let command = match word.as_str() {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "all" => Command::All,
            "birthdays" => Command::Birthdays,
            "exit" | "close" => Command::Exit,
            "add" => {
                let a = args("add");
                Command::Add {
                    name: a.required(0)?,
                    phone: a.required(1)?,
                    birthday: a.optional(2),
                }
            }
            "find" => Command::Find {
                name: args("find").required(0)?,
            },
            "remove" => Command::Remove {
                name: args("remove").required(0)?,
            },
            "addphone" => {
                let a = args("addphone");
                Command::AddPhone {
                    name: a.required(0)?,
                    phone: a.required(1)?,
                }
            }
            "editphone" => {
                let a = args("editphone");
                Command::EditPhone {
                    name: a.required(0)?,
                    old_phone: a.required(1)?,
                    new_phone: a.required(2)?,
                }
            }
            "remove_phone" | "removephone" => {
                let a = args("remove_phone");
                Command::RemovePhone {
                    name: a.required(0)?,
                    phone: a.required(1)?,
                }
            }
            "addbirthday" => {
                let a = args("addbirthday");
                Command::AddBirthday {
                    name: a.required(0)?,
                    birthday: a.required(1)?,
                }
            }
            "show_birthday" | "showbirthday" => Command::ShowBirthday {
                name: args("show_birthday").required(0)?,
            },
            _ => return Err(CommandError::UnknownCommand(first.to_string())),
        };

        Ok(Some(command))
    }
}
