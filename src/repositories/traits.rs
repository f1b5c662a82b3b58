use crate::error::StorageResult;
use crate::models::Directory;

/// Repository for directory snapshots.
///
/// Provides abstraction over where a directory is kept between sessions,
/// enabling different implementations (file, in-memory for tests).
pub trait DirectoryRepository {
    /// Load the last saved directory.
    ///
    /// Returns an empty directory when nothing has been saved yet.
    fn load(&self) -> StorageResult<Directory>;

    /// Replace the saved snapshot with `directory`.
    fn save(&self, directory: &Directory) -> StorageResult<()>;
}
