//! Directory: the keyed collection of all records.

use super::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Records keyed by name, in insertion order.
///
/// At most one record exists per name. Adding a record under a name that is
/// already present merges phones into the existing record instead of
/// replacing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredDirectory", into = "StoredDirectory")]
pub struct Directory {
    records: IndexMap<String, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, or merge its phones into the record of the same name.
    ///
    /// On merge, each incoming phone not already present by value is
    /// appended; the incoming birthday is discarded.
    pub fn add_record(&mut self, record: Record) {
        match self.records.get_mut(record.name()) {
            Some(existing) => {
                tracing::debug!(name = %record.name(), "Merging phones into existing record");
                existing.merge_phones(record);
            }
            None => {
                tracing::debug!(name = %record.name(), "Inserting new record");
                self.records.insert(record.name().to_string(), record);
            }
        }
    }

    /// Remove every record whose name equals `name` exactly.
    ///
    /// Returns how many records were removed (zero or one).
    pub fn delete(&mut self, name: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| record.name() != name);
        let removed = before - self.records.len();
        tracing::debug!(name = %name, removed, "Delete");
        removed
    }

    /// Records whose name contains `query` ignoring case, or whose phones
    /// contain `query` verbatim.
    ///
    /// Results keep insertion order and list each record once.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        let lowered = query.to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record.name().to_lowercase().contains(&lowered) || record.phone_contains(query)
            })
            .collect()
    }

    /// Lazily page through a snapshot of the current records.
    ///
    /// Later changes to the directory are not seen by the returned iterator.
    /// A page size of zero is treated as one.
    pub fn pages(&self, page_size: usize) -> Pages {
        Pages {
            remaining: self.records.values().cloned().collect::<Vec<_>>().into_iter(),
            page_size: page_size.max(1),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Consuming iterator over fixed-size pages of records.
#[derive(Debug)]
pub struct Pages {
    remaining: std::vec::IntoIter<Record>,
    page_size: usize,
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<Record> = self.remaining.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}

/// Snapshot layout: records as an ordered list, keyed by their own names on load.
#[derive(Serialize, Deserialize)]
struct StoredDirectory {
    records: Vec<Record>,
}

impl From<StoredDirectory> for Directory {
    fn from(stored: StoredDirectory) -> Self {
        let mut directory = Directory::new();
        for record in stored.records {
            directory.add_record(record);
        }
        directory
    }
}

impl From<Directory> for StoredDirectory {
    fn from(directory: Directory) -> Self {
        Self {
            records: directory.records.into_values().collect(),
        }
    }
}
