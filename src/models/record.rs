//! Record model representing one contact in the address book.

use crate::domain::{Field, FieldKind, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, zero or more phones, and an optional birthday.
///
/// Phones keep insertion order and may repeat. A birthday that was supplied
/// but rejected stays attached as an empty field, which is distinct from no
/// birthday at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct Record {
    name: Field,
    phones: Vec<Field>,
    birthday: Option<Field>,
}

impl Record {
    /// Create a new record. Construction never fails.
    ///
    /// A rejected birthday is still attached, holding no value.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Self {
        let birthday = birthday.map(|raw| {
            let mut field = Field::empty(FieldKind::Birthday);
            // Rejection is already logged by the field; an empty birthday stays attached.
            let _ = field.set(raw);
            field
        });

        Self {
            name: Field::name(name),
            phones: Vec::new(),
            birthday,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.value().unwrap_or_default()
    }

    pub fn phones(&self) -> &[Field] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Field> {
        self.birthday.as_ref()
    }

    /// Append a phone if it passes validation.
    ///
    /// A rejected phone is not appended. No duplicate check is done here.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let mut phone = Field::empty(FieldKind::Phone);
        phone.set(raw)?;
        tracing::debug!(name = %self.name(), phone = %raw, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone whose value equals `raw` exactly.
    ///
    /// Returns how many phones were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| !phone.holds(raw));
        before - self.phones.len()
    }

    /// First phone whose value equals `raw` exactly.
    pub fn find_phone(&self, raw: &str) -> Option<&Field> {
        self.phones.iter().find(|phone| phone.holds(raw))
    }

    /// Re-assign the first phone equal to `old` with `new`.
    ///
    /// The replacement goes through the phone rule; a rejected value leaves
    /// the phone present but empty and is reported as
    /// [`RecordError::InvalidPhone`].
    pub fn change_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let name = self.name().to_string();
        let Some(phone) = self.phones.iter_mut().find(|phone| phone.holds(old)) else {
            tracing::debug!(name = %name, phone = %old, "Phone to change not found");
            return Err(RecordError::PhoneNotFound(old.to_string()));
        };

        phone.set(new)?;
        tracing::debug!(name = %name, old = %old, new = %new, "Phone changed");
        Ok(())
    }

    /// Append each phone of `other` not already present by value.
    ///
    /// Empty phones compare equal to each other. Everything else on this
    /// record, the birthday included, is left untouched.
    pub(crate) fn merge_phones(&mut self, other: Record) {
        for phone in other.phones {
            if !self.phones.contains(&phone) {
                self.phones.push(phone);
            }
        }
    }

    /// True if any phone's display form contains `needle`.
    pub(crate) fn phone_contains(&self, needle: &str) -> bool {
        self.phones
            .iter()
            .any(|phone| phone.to_string().contains(needle))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|phone| phone.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Name: {}, phone: {}", self.name(), phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

/// Record as read back from a snapshot, before field kinds are checked.
#[derive(Deserialize)]
struct StoredRecord {
    name: Field,
    #[serde(default)]
    phones: Vec<Field>,
    #[serde(default)]
    birthday: Option<Field>,
}

impl TryFrom<StoredRecord> for Record {
    type Error = String;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        if stored.name.kind() != FieldKind::Name || stored.name.is_empty() {
            return Err("record name must be a non-empty name field".to_string());
        }
        if stored.phones.iter().any(|p| p.kind() != FieldKind::Phone) {
            return Err(format!("record {} has a non-phone entry in phones", stored.name));
        }
        if let Some(birthday) = &stored.birthday {
            if birthday.kind() != FieldKind::Birthday {
                return Err(format!("record {} has a non-birthday field as birthday", stored.name));
            }
        }
        Ok(Self {
            name: stored.name,
            phones: stored.phones,
            birthday: stored.birthday,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_birthday() {
        let record = Record::new("Alice", None);
        assert_eq!(record.name(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_new_with_rejected_birthday_keeps_empty_field() {
        let record = Record::new("Alice", Some("1990-01-01"));
        let birthday = record.birthday().expect("birthday stays attached");
        assert!(birthday.is_empty());
        assert_eq!(record.to_string(), "Name: Alice, phone: , birthday: None");
    }

    #[test]
    fn test_add_phone_accepts_then_rejects() {
        let mut record = Record::new("Alice", None);
        assert!(record.add_phone("1234567890").is_ok());
        assert!(record.add_phone("12345").is_err());

        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].value(), Some("1234567890"));
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new("Alice", None);
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("Alice", None);
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        assert_eq!(record.remove_phone("1111111111"), 2);
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.remove_phone("9999999999"), 0);
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("Alice", None);
        record.add_phone("1234567890").unwrap();

        assert!(record.find_phone("1234567890").is_some());
        assert!(record.find_phone("123456789").is_none());
    }

    #[test]
    fn test_change_phone() {
        let mut record = Record::new("Alice", None);
        record.add_phone("1234567890").unwrap();

        assert!(record.change_phone("1234567890", "0000000000").is_ok());
        assert!(record.find_phone("1234567890").is_none());
        assert!(record.find_phone("0000000000").is_some());
    }

    #[test]
    fn test_change_phone_not_found() {
        let mut record = Record::new("Alice", None);
        record.add_phone("1234567890").unwrap();

        let err = record.change_phone("5555555555", "0000000000").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("5555555555".to_string()));
        assert_eq!(record.phones()[0].value(), Some("1234567890"));
    }

    #[test]
    fn test_change_phone_to_invalid_clears_it() {
        let mut record = Record::new("Alice", None);
        record.add_phone("1234567890").unwrap();

        let err = record.change_phone("1234567890", "abc").unwrap_err();
        assert!(matches!(err, RecordError::InvalidPhone(_)));
        assert_eq!(record.phones().len(), 1);
        assert!(record.phones()[0].is_empty());
        assert_eq!(record.to_string(), "Name: Alice, phone: None");
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("Bob", Some("01.02.1990"));
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Name: Bob, phone: 1111111111; 2222222222, birthday: 01.02.1990"
        );
    }

    #[test]
    fn test_merge_phones_skips_existing_and_keeps_birthday() {
        let mut existing = Record::new("Bob", Some("01.02.1990"));
        existing.add_phone("1111111111").unwrap();

        let mut incoming = Record::new("Bob", Some("03.04.2000"));
        incoming.add_phone("1111111111").unwrap();
        incoming.add_phone("2222222222").unwrap();

        existing.merge_phones(incoming);
        assert_eq!(existing.phones().len(), 2);
        assert_eq!(existing.birthday().unwrap().value(), Some("01.02.1990"));
    }

    #[test]
    fn test_deserialization_rejects_wrong_kinds() {
        let json = r#"{"name":{"kind":"name","value":"Bob"},
            "phones":[{"kind":"birthday","value":"01.01.2000"}],"birthday":null}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
