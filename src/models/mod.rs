//! Data models for the address book.
//!
//! This module contains the record type for a single contact and the
//! directory that keys records by name.

pub mod directory;
pub mod record;

pub use directory::{Directory, Pages};
pub use record::Record;
