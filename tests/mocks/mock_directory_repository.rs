use address_book::error::{StorageError, StorageResult};
use address_book::models::Directory;
use address_book::repositories::DirectoryRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the snapshot in memory, can be told to fail saves, and tracks
/// method calls for verification. Clones share state, so a test can keep a
/// handle after boxing one into a session.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectoryRepository {
    snapshot: Arc<Mutex<Option<Directory>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a repository with no saved snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `directory`.
    pub fn with_snapshot(directory: Directory) -> Self {
        let repo = Self::new();
        *repo.snapshot.lock().unwrap() = Some(directory);
        repo
    }

    /// The last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<Directory> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Make every following save fail.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl DirectoryRepository for MockDirectoryRepository {
    fn load(&self) -> StorageResult<Directory> {
        self.track_call("load");
        Ok(self.snapshot().unwrap_or_default())
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        *self.snapshot.lock().unwrap() = Some(directory.clone());
        Ok(())
    }
}
