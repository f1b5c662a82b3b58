//! Command handlers for an address book session.
//!
//! A session owns the directory and the repository it was loaded from.
//! Handlers turn each command into directory/record operations and a reply
//! for the user; failures are replies, never panics.

use super::command::{Command, HELP};
use crate::error::{RecordError, StorageResult};
use crate::models::{Directory, Record};
use crate::repositories::DirectoryRepository;

/// What the session has to say after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the user (may span several lines, may be empty).
    pub message: String,

    /// True once the session has saved and should end.
    pub exit: bool,
}

impl Reply {
    fn say(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }

    fn goodbye() -> Self {
        Self {
            message: "Good bye!".to_string(),
            exit: true,
        }
    }
}

/// An interactive session over one directory.
pub struct Session {
    directory: Directory,
    repository: Box<dyn DirectoryRepository>,
    page_size: usize,
}

impl Session {
    /// Open a session, loading the directory from `repository`.
    pub fn open(repository: Box<dyn DirectoryRepository>, page_size: usize) -> StorageResult<Self> {
        let directory = repository.load()?;
        Ok(Self {
            directory,
            repository,
            page_size,
        })
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Persist the current directory.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.directory)
    }

    /// Run one command against the directory.
    pub fn execute(&mut self, command: Command) -> Reply {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Add {
                name,
                phone,
                birthday,
            } => self.handle_add(name, &phone, birthday.as_deref()),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.handle_change(&name, &old_phone, &new_phone),
            Command::Find { query } => self.handle_find(&query),
            Command::Delete { name } => self.handle_delete(&name),
            Command::ShowAll => self.handle_show_all(),
            Command::ShowPage => self.handle_show_page(),
            Command::Help => Reply::say(HELP),
            Command::Exit => self.handle_exit(),
            Command::Empty => Reply::say(""),
        }
    }

    fn handle_add(&mut self, name: String, phone: &str, birthday: Option<&str>) -> Reply {
        let mut record = Record::new(name.clone(), birthday);
        if record.add_phone(phone).is_err() {
            return Reply::say(format!("Error: Invalid phone format: {}", phone));
        }

        let mut message = format!("Record {} added.", name);
        if record.birthday().is_some_and(|b| b.is_empty()) {
            message.push_str(" Birthday ignored: expected DD.MM.YYYY.");
        }
        self.directory.add_record(record);
        Reply::say(message)
    }

    fn handle_change(&mut self, name: &str, old_phone: &str, new_phone: &str) -> Reply {
        let Some(record) = self.directory.get_mut(name) else {
            return Reply::say(format!("Error: Record {} not found.", name));
        };

        match record.change_phone(old_phone, new_phone) {
            Ok(()) => Reply::say(format!("Phone {} changed to {}.", old_phone, new_phone)),
            Err(e @ RecordError::PhoneNotFound(_)) => Reply::say(format!("Error: {}.", e)),
            Err(e @ RecordError::InvalidPhone(_)) => Reply::say(format!(
                "Error: {}. Phone {} is now empty.",
                e, old_phone
            )),
        }
    }

    fn handle_find(&self, query: &str) -> Reply {
        let matches = self.directory.find(query);
        if matches.is_empty() {
            return Reply::say(format!("No records match '{}'.", query));
        }

        let lines: Vec<String> = matches.iter().map(|record| record.to_string()).collect();
        Reply::say(lines.join("\n"))
    }

    fn handle_delete(&mut self, name: &str) -> Reply {
        if self.directory.delete(name) > 0 {
            Reply::say(format!("Record {} deleted.", name))
        } else {
            Reply::say(format!("Error: Record {} not found.", name))
        }
    }

    fn handle_show_all(&self) -> Reply {
        if self.directory.is_empty() {
            Reply::say("No records.")
        } else {
            Reply::say(self.directory.to_string())
        }
    }

    fn handle_show_page(&self) -> Reply {
        if self.directory.is_empty() {
            return Reply::say("No records.");
        }

        let mut lines = Vec::new();
        for (i, page) in self.directory.pages(self.page_size).enumerate() {
            lines.push(format!("--- page {} ---", i + 1));
            lines.extend(page.iter().map(|record| record.to_string()));
        }
        Reply::say(lines.join("\n"))
    }

    fn handle_exit(&self) -> Reply {
        match self.save() {
            Ok(()) => Reply::goodbye(),
            Err(e) => {
                tracing::error!("Failed to save address book: {}", e);
                Reply::say(format!("Error: could not save address book: {}", e))
            }
        }
    }
}
