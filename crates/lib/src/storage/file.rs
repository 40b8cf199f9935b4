//! File-backed storage.
//!
//! # Storage Layout
//!
//! ```text
//! {base_path}/
//! ├── <key>           # Blob for one storage key
//! └── .<key>.tmp      # Transient, only present mid-write
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Suffix for the temporary file used during atomic writes.
const TEMP_SUFFIX: &str = ".tmp";

/// Stores each key as a file under a base directory.
///
/// Writes go to a temporary file that is then renamed over the target, so a
/// crash mid-write leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
  base_path: PathBuf,
}

impl FileStorage {
  /// Create a storage rooted at `base_path`. The directory is created on the
  /// first write.
  pub fn new(base_path: impl Into<PathBuf>) -> Self {
    Self {
      base_path: base_path.into(),
    }
  }

  pub fn base_path(&self) -> &Path {
    &self.base_path
  }

  /// Get the path holding the blob for `key`.
  ///
  /// Keys map directly to file names, so anything that could escape the base
  /// directory or collide with a temporary file is rejected.
  fn item_path(&self, key: &str) -> Result<PathBuf, StorageError> {
    let invalid = key.is_empty()
      || key.starts_with('.')
      || key.contains(['/', '\\', '\0'])
      || key.ends_with(TEMP_SUFFIX);
    if invalid {
      return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(self.base_path.join(key))
  }

  fn temp_path(&self, key: &str) -> PathBuf {
    self.base_path.join(format!(".{}{}", key, TEMP_SUFFIX))
  }

  fn ensure_dir(&self) -> Result<(), StorageError> {
    fs::create_dir_all(&self.base_path).map_err(StorageError::Io)
  }

  /// Delete the blob at `key`.
  ///
  /// Removing a key that was never written is not an error.
  pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
    let path = self.item_path(key)?;
    match fs::remove_file(&path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(StorageError::Io(e)),
    }
  }
}

impl Storage for FileStorage {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    let path = self.item_path(key)?;

    match fs::read_to_string(&path) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(StorageError::Io(e)),
    }
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    let path = self.item_path(key)?;
    self.ensure_dir()?;

    let temp_path = self.temp_path(key);
    fs::write(&temp_path, value).map_err(StorageError::Io)?;
    fs::rename(&temp_path, &path).map_err(StorageError::Io)?;

    Ok(())
  }
}
