//! Domain value objects and types.
//!
//! This module contains the validated field type every record is built from.
//! A field carries one of a closed set of kinds, and the kind decides which
//! values the field may hold.

pub mod errors;
pub mod field;

pub use errors::ValidationError;
pub use field::{Field, FieldKind, PHONE_DIGITS};
