use crate::error::{StorageError, StorageResult};
use crate::models::Directory;
use crate::repositories::traits::DirectoryRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory repository backed by a JSON file on disk.
///
/// A missing file means no snapshot was saved yet. Saves are written to a
/// sibling temporary file first and then renamed over the snapshot, so an
/// interrupted save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileDirectoryRepository {
    path: PathBuf,
}

impl FileDirectoryRepository {
    /// Create a repository for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DirectoryRepository for FileDirectoryRepository {
    fn load(&self) -> StorageResult<Directory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(Directory::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        let directory: Directory = serde_json::from_slice(&bytes)?;
        tracing::info!(
            path = %self.path.display(),
            records = directory.len(),
            "Snapshot loaded"
        );
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(directory)?;
        let temp = self.temp_path();

        fs::write(&temp, json).map_err(|e| Self::io_error(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| Self::io_error(&self.path, e))?;

        tracing::info!(
            path = %self.path.display(),
            records = directory.len(),
            "Snapshot saved"
        );
        Ok(())
    }
}
