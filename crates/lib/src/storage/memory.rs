use std::cell::RefCell;
use std::collections::HashMap;

use super::{Storage, StorageError};

/// In-process storage backed by a map.
///
/// Behaves like a browser session storage: items live as long as the value,
/// and an optional quota bounds the total size of keys plus values in bytes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  items: RefCell<HashMap<String, String>>,
  quota: Option<usize>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a storage that rejects writes once keys and values together
  /// would exceed `limit` bytes.
  pub fn with_quota(limit: usize) -> Self {
    Self {
      items: RefCell::default(),
      quota: Some(limit),
    }
  }

  /// Remove the item at `key`, returning its previous value.
  pub fn remove_item(&self, key: &str) -> Option<String> {
    self.items.borrow_mut().remove(key)
  }

  /// Remove every item.
  pub fn clear(&self) {
    self.items.borrow_mut().clear();
  }

  pub fn len(&self) -> usize {
    self.items.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.borrow().is_empty()
  }

  /// Bytes used by every item except `key`.
  fn used_without(&self, key: &str) -> usize {
    self
      .items
      .borrow()
      .iter()
      .filter(|(k, _)| k.as_str() != key)
      .map(|(k, v)| k.len() + v.len())
      .sum()
  }
}

impl Storage for MemoryStorage {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.items.borrow().get(key).cloned())
  }

  fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
    if let Some(limit) = self.quota {
      let size = self.used_without(key) + key.len() + value.len();
      if size > limit {
        return Err(StorageError::QuotaExceeded {
          key: key.to_string(),
          size,
          limit,
        });
      }
    }

    self.items.borrow_mut().insert(key.to_string(), value.to_string());
    Ok(())
  }
}
