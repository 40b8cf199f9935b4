//! Rehydration: computing a store's initial state from storage.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::RehydrateError;
use crate::storage::Storage;

/// Result of a successful [`rehydrate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rehydrated<S> {
  /// Storage contributed nothing. The caller's initial state is used as-is,
  /// without a serde round trip.
  Unchanged,
  /// Persisted data merged over the initial state.
  Merged(S),
}

/// Read, decode and merge persisted state into `initial`.
///
/// Without an initial state, `S::default()` is the merge base, so a partial
/// persisted subset still produces a complete state.
pub fn rehydrate<S, St>(config: &Config, storage: &St, initial: Option<&S>) -> Result<Rehydrated<S>, RehydrateError>
where
  S: Serialize + DeserializeOwned + Default,
  St: Storage + ?Sized,
{
  let key = config.key();

  let raw = storage.get_item(key).map_err(|source| RehydrateError::Read {
    key: key.to_string(),
    source,
  })?;
  let persisted = config.decode(raw.as_deref()).map_err(RehydrateError::Decode)?;

  let base = match initial {
    Some(state) => serde_json::to_value(state),
    None => serde_json::to_value(S::default()),
  }
  .map_err(RehydrateError::Convert)?;
  let merged = config.merge(base.clone(), persisted).map_err(RehydrateError::Merge)?;

  if merged == base {
    return Ok(Rehydrated::Unchanged);
  }
  serde_json::from_value(merged).map(Rehydrated::Merged).map_err(RehydrateError::Convert)
}

/// Like [`rehydrate`], but never fails: on any error a warning is logged and
/// `initial` is returned untouched.
pub fn rehydrate_or_initial<S, St>(config: &Config, storage: &St, initial: Option<S>) -> Option<S>
where
  S: Serialize + DeserializeOwned + Default,
  St: Storage + ?Sized,
{
  match rehydrate(config, storage, initial.as_ref()) {
    Ok(Rehydrated::Merged(state)) => {
      debug!(key = %config.key(), "rehydrated state from storage");
      Some(state)
    }
    Ok(Rehydrated::Unchanged) => {
      debug!(key = %config.key(), "nothing persisted, using initial state");
      initial
    }
    Err(e) => {
      warn!(
        key = %config.key(),
        error = %e,
        "failed to rehydrate state from storage, using initial state"
      );
      initial
    }
  }
}
