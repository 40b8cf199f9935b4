//! Persistence: mirroring a slice of live state into storage.

use serde::Serialize;
use tracing::{trace, warn};

use crate::config::Config;
use crate::error::PersistError;
use crate::slicer::{PathSpec, Slicer};
use crate::storage::Storage;

/// Writes a slice of the state to storage on every change.
///
/// The slicing function is built once, when the persister is created.
pub struct Persister<St> {
  config: Config,
  slice: Slicer,
  storage: St,
}

impl<St: Storage> Persister<St> {
  pub fn new(config: Config, paths: &PathSpec, storage: St) -> Self {
    let slice = config.slicer(paths);
    Self { config, slice, storage }
  }

  /// Slice, encode and write `state`.
  pub fn persist<S: Serialize + ?Sized>(&self, state: &S) -> Result<(), PersistError> {
    let key = self.config.key();

    let state = serde_json::to_value(state).map_err(PersistError::Convert)?;
    let subset = (self.slice)(&state).map_err(PersistError::Slice)?;
    let encoded = self.config.encode(&subset).map_err(PersistError::Encode)?;
    self
      .storage
      .set_item(key, &encoded)
      .map_err(|source| PersistError::Write {
        key: key.to_string(),
        source,
      })?;

    trace!(key = %key, bytes = encoded.len(), "persisted state");
    Ok(())
  }

  /// Change handler: persists `state`, logging instead of failing.
  pub fn on_change<S: Serialize + ?Sized>(&self, state: &S) {
    if let Err(e) = self.persist(state) {
      warn!(key = %self.config.key(), error = %e, "failed to persist state to storage");
    }
  }
}
