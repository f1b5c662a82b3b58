//! Address Book - a command-line contact manager.
//!
//! Stores names, phone numbers, and optional birthdays, and keeps them in a
//! local snapshot file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday) and their rules
//! - **models**: Records and the name-keyed directory
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving directory snapshots
//! - **session**: Command parsing and the interactive command loop

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Field, FieldKind, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::{Directory, Pages, Record};
pub use repositories::{DirectoryRepository, FileDirectoryRepository};
pub use session::{Command, Reply, Session};
