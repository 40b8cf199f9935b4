//! State containers.
//!
//! The enhancer works with any container implementing [`StateContainer`]:
//! it needs to read the current state and to register one change listener.
//! [`Store`] is a minimal reducer-driven implementation.

mod reducer;

pub use reducer::{Reducer, Store, create_store};

/// Change listener. Called synchronously with the new state after every
/// state transition.
pub type Listener<S> = Box<dyn FnMut(&S)>;

/// Handle identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// What the enhancer requires of an underlying store.
pub trait StateContainer {
  type State;

  /// The current state snapshot.
  fn state(&self) -> &Self::State;

  /// Register `listener` to run after every state change, in registration
  /// order.
  fn subscribe(&mut self, listener: Listener<Self::State>) -> Subscription;
}
