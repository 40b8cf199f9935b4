//! Synchronous key-value storage media.
//!
//! The persistence pipeline only ever calls [`Storage::get_item`] and
//! [`Storage::set_item`]. Deleting or clearing persisted data is an external
//! maintenance operation, offered by the concrete backends as inherent methods.

use std::io;
use std::rc::Rc;

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
  #[error("storage is unavailable: {0}")]
  Unavailable(String),

  #[error("quota exceeded writing `{key}`: {size} bytes would exceed the {limit} byte limit")]
  QuotaExceeded { key: String, size: usize, limit: usize },

  #[error("invalid storage key `{0}`")]
  InvalidKey(String),

  #[error("storage I/O failed: {0}")]
  Io(#[source] io::Error),
}

/// A synchronous key-value namespace holding textual blobs.
///
/// Both operations may fail; callers decide whether a failure is fatal.
pub trait Storage {
  /// Read the blob stored at `key`, or `None` if nothing was ever written.
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

  /// Store `value` at `key`, replacing any previous blob.
  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for &T {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    (**self).get_item(key)
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    (**self).set_item(key, value)
  }
}

impl<T: Storage + ?Sized> Storage for Rc<T> {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    (**self).get_item(key)
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    (**self).set_item(key, value)
  }
}

impl<T: Storage + ?Sized> Storage for Box<T> {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    (**self).get_item(key)
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    (**self).set_item(key, value)
  }
}
