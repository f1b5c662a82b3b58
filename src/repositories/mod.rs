mod file_directory_repository;
mod traits;

pub use file_directory_repository::FileDirectoryRepository;
pub use traits::DirectoryRepository;
