//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a field rejects an assigned value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday does not match `DD.MM.YYYY`.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(birthday) => {
                write!(f, "Invalid birthday (expected DD.MM.YYYY): {}", birthday)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
