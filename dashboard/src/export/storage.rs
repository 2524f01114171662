use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to initialize export directory: {0}")]
    UnableToInitialize(std::io::Error),

    #[error("Unable to write blob: {0}")]
    UnableToWriteBlob(std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Destination for exported files
pub trait ExportStorage {
    // Called before the first write, should be idempotent
    fn init(&self) -> StorageResult<()>;
    fn write_blob(&self, path: &str, bytes: &[u8]) -> StorageResult<PathBuf>;
}

pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn get_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl ExportStorage for FileStorage {
    fn init(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path).map_err(StorageError::UnableToInitialize)
    }

    /// Overwrites any earlier export with the same name
    fn write_blob(&self, path: &str, bytes: &[u8]) -> StorageResult<PathBuf> {
        let file_path = self.get_path(path);

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .map_err(StorageError::UnableToWriteBlob)?;

        file.write_all(bytes)
            .map_err(StorageError::UnableToWriteBlob)?;

        Ok(file_path)
    }
}
