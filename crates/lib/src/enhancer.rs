//! The store enhancer tying configuration, rehydration and persistence
//! together.
//!
//! An enhancer wraps a store factory and returns a factory with the same
//! signature. The wrapped factory:
//!
//! 1. rehydrates the initial state from storage (falling back to the caller's
//!    initial state on any failure),
//! 2. calls the underlying factory with that state,
//! 3. subscribes one listener that persists a slice of the state after every
//!    change, for the lifetime of the store,
//! 4. returns the store unchanged.

use serde::{Serialize, de::DeserializeOwned};

use crate::config::{Config, ConfigOverrides};
use crate::persist::Persister;
use crate::rehydrate::rehydrate_or_initial;
use crate::slicer::PathSpec;
use crate::storage::Storage;
use crate::store::StateContainer;

/// A configured persistence enhancer, ready to wrap a store factory.
#[derive(Debug)]
pub struct PersistState<St> {
  paths: PathSpec,
  config: Config,
  storage: St,
}

/// Create an enhancer persisting `paths` of the state into `storage`.
///
/// Pass [`PathSpec::All`] (or `None::<&str>`) to persist the whole state.
pub fn persist_state<St: Storage>(
  storage: St,
  paths: impl Into<PathSpec>,
  overrides: ConfigOverrides,
) -> PersistState<St> {
  PersistState {
    paths: paths.into(),
    config: Config::resolve(overrides),
    storage,
  }
}

impl<St: Storage + 'static> PersistState<St> {
  pub fn paths(&self) -> &PathSpec {
    &self.paths
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Wrap the store factory `next`.
  ///
  /// The returned factory takes the same `(reducer, initial_state)` arguments
  /// and produces the same store type. Without an initial state, persisted
  /// data is merged over `S::default()`. Nothing that goes wrong while reading
  /// or writing storage is reported to the caller; failures are logged as
  /// warnings.
  pub fn enhance<R, S, C, F>(self, next: F) -> impl FnOnce(R, Option<S>) -> C
  where
    F: FnOnce(R, Option<S>) -> C,
    C: StateContainer<State = S>,
    S: Serialize + DeserializeOwned + Default + 'static,
  {
    move |reducer: R, initial_state: Option<S>| -> C {
      let PersistState { paths, config, storage } = self;

      let preloaded = rehydrate_or_initial(&config, &storage, initial_state);
      let mut store = next(reducer, preloaded);

      let persister = Persister::new(config, &paths, storage);
      // Never unsubscribed: persistence lives as long as the store.
      let _subscription = store.subscribe(Box::new(move |state: &S| persister.on_change(state)));

      store
    }
  }
}
