//! Errors raised inside the persistence pipeline.
//!
//! None of these ever reach the code that creates or updates a store: the
//! enhancer logs them and falls back. They are public so the stages can be
//! driven and inspected on their own.

use thiserror::Error;

use crate::storage::StorageError;

/// Failure while computing the initial state from storage.
#[derive(Debug, Error)]
pub enum RehydrateError {
  #[error("failed to read `{key}` from storage: {source}")]
  Read {
    key: String,
    #[source]
    source: StorageError,
  },

  // Hook errors carry their whole context chain, hence `{0:#}`.
  #[error("failed to decode persisted state: {0:#}")]
  Decode(anyhow::Error),

  #[error("failed to merge persisted state: {0:#}")]
  Merge(anyhow::Error),

  #[error("state does not convert to or from the store's state type: {0}")]
  Convert(#[source] serde_json::Error),
}

/// Failure while writing a state change to storage.
#[derive(Debug, Error)]
pub enum PersistError {
  #[error("failed to serialize state: {0}")]
  Convert(#[source] serde_json::Error),

  #[error("failed to slice state: {0:#}")]
  Slice(anyhow::Error),

  #[error("failed to encode state: {0:#}")]
  Encode(anyhow::Error),

  #[error("failed to write `{key}` to storage: {source}")]
  Write {
    key: String,
    #[source]
    source: StorageError,
  },
}
