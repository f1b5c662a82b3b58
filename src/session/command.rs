//! Command-line parsing for the interactive session.

use crate::error::{CommandError, CommandResult};

pub const ADD_USAGE: &str = "add <name> <phone> [birthday DD.MM.YYYY]";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
pub const FIND_USAGE: &str = "find <name or phone fragment>";
pub const DELETE_USAGE: &str = "del <name>";
pub const SHOW_USAGE: &str = "show all | show page";

/// Command list printed at session start and by `help`.
pub const HELP: &str = "\
Command list
1. add <name> <phone> [birthday] - add a phone (and optional DD.MM.YYYY birthday) to a contact;
2. change <name> <old phone> <new phone> - replace one of a contact's phones;
3. find <query> - find contacts by a name fragment or phone digits;
4. show all - list every contact;
5. show page - list contacts one page at a time;
6. del <name> - delete a contact;
7. help - show this list;
8. exit, close, good bye - save and quit.";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Find {
        query: String,
    },
    Delete {
        name: String,
    },
    ShowAll,
    ShowPage,
    Help,
    Exit,
    /// Blank input.
    Empty,
}

impl Command {
    /// Parse a line of input.
    ///
    /// Keywords are matched ignoring case; arguments are kept verbatim.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, args)) = tokens.split_first() else {
            return Ok(Command::Empty);
        };

        match keyword.to_lowercase().as_str() {
            "add" => match args {
                [name, phone] => Ok(Command::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: None,
                }),
                [name, phone, birthday] => Ok(Command::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: Some(birthday.to_string()),
                }),
                _ => Err(CommandError::Usage(ADD_USAGE)),
            },
            "change" => match args {
                [name, old_phone, new_phone] => Ok(Command::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                }),
                _ => Err(CommandError::Usage(CHANGE_USAGE)),
            },
            "find" => match args {
                [query] => Ok(Command::Find {
                    query: query.to_string(),
                }),
                _ => Err(CommandError::Usage(FIND_USAGE)),
            },
            "del" => match args {
                [name] => Ok(Command::Delete {
                    name: name.to_string(),
                }),
                _ => Err(CommandError::Usage(DELETE_USAGE)),
            },
            "show" => match args {
                [what] if what.eq_ignore_ascii_case("all") => Ok(Command::ShowAll),
                [what] if what.eq_ignore_ascii_case("page") => Ok(Command::ShowPage),
                _ => Err(CommandError::Usage(SHOW_USAGE)),
            },
            "help" if args.is_empty() => Ok(Command::Help),
            "exit" | "close" if args.is_empty() => Ok(Command::Exit),
            "good" => match args {
                [bye] if bye.eq_ignore_ascii_case("bye") => Ok(Command::Exit),
                _ => Err(CommandError::Unknown(line.trim().to_string())),
            },
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}
