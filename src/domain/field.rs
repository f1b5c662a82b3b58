//! Validated field value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is a valid regex")
});

/// The closed set of field kinds a record can hold.
///
/// Each kind carries its own validation rule; there is no other way to
/// attach a rule to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Contact name. Any text is accepted.
    Name,

    /// Phone number. Exactly ten ASCII digits.
    Phone,

    /// Birthday in `DD.MM.YYYY` shape. The calendar is not checked, so
    /// `99.99.9999` is accepted.
    Birthday,
}

impl FieldKind {
    /// Check `raw` against this kind's rule.
    pub fn validate(self, raw: &str) -> Result<(), ValidationError> {
        match self {
            Self::Name => Ok(()),
            Self::Phone => {
                if raw.len() == PHONE_DIGITS && raw.chars().all(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidPhone(raw.to_string()))
                }
            }
            Self::Birthday => {
                if BIRTHDAY_PATTERN.is_match(raw) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidBirthday(raw.to_string()))
                }
            }
        }
    }
}

/// A value holder that re-validates on every assignment.
///
/// The stored value is either absent or satisfies the kind's rule. A rejected
/// assignment leaves the field present but empty and reports the rejection
/// to the caller instead of aborting.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, FieldKind};
///
/// let mut phone = Field::empty(FieldKind::Phone);
/// assert!(phone.set("0501234567").is_ok());
/// assert_eq!(phone.value(), Some("0501234567"));
///
/// assert!(phone.set("050-123").is_err());
/// assert_eq!(phone.value(), None);
/// assert_eq!(phone.to_string(), "None");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredField")]
pub struct Field {
    kind: FieldKind,
    value: Option<String>,
}

impl Field {
    /// Create a field of the given kind holding no value.
    pub fn empty(kind: FieldKind) -> Self {
        Self { kind, value: None }
    }

    /// Create a name field. Names are never rejected.
    pub fn name(raw: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Name,
            value: Some(raw.into()),
        }
    }

    /// Assign a new value, running the kind's rule first.
    ///
    /// On success the raw input is stored verbatim. On rejection the field
    /// is cleared and the reason is returned.
    pub fn set(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        let raw = raw.into();
        match self.kind.validate(&raw) {
            Ok(()) => {
                self.value = Some(raw);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(kind = ?self.kind, "{}", e);
                self.value = None;
                Err(e)
            }
        }
    }

    /// The stored value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// True when the field holds no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// True when the stored value equals `raw` exactly.
    pub fn holds(&self, raw: &str) -> bool {
        self.value.as_deref() == Some(raw)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "None"),
        }
    }
}

/// Field as read back from a snapshot, before its invariant is re-checked.
#[derive(Deserialize)]
struct StoredField {
    kind: FieldKind,
    value: Option<String>,
}

// Serde support - a stored value that breaks its kind's rule is a corrupt snapshot
impl TryFrom<StoredField> for Field {
    type Error = ValidationError;

    fn try_from(stored: StoredField) -> Result<Self, Self::Error> {
        if let Some(value) = &stored.value {
            stored.kind.validate(value)?;
        }
        Ok(Self {
            kind: stored.kind,
            value: stored.value,
        })
    }
}
