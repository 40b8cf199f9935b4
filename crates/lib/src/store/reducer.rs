use std::fmt;

use super::{Listener, StateContainer, Subscription};

/// `(state, action) -> next state`
pub type Reducer<S, A> = Box<dyn Fn(&S, &A) -> S>;

/// A reducer-driven state container.
///
/// Every [`dispatch`](Store::dispatch) replaces the state with the reducer's
/// output and then notifies listeners one at a time, in subscription order.
pub struct Store<S, A> {
  state: S,
  reducer: Reducer<S, A>,
  listeners: Vec<(Subscription, Listener<S>)>,
  next_id: u64,
}

/// Create a store. Without an initial state the store starts from
/// `S::default()`.
pub fn create_store<S: Default, A>(reducer: Reducer<S, A>, initial_state: Option<S>) -> Store<S, A> {
  Store {
    state: initial_state.unwrap_or_default(),
    reducer,
    listeners: Vec::new(),
    next_id: 0,
  }
}

impl<S, A> Store<S, A> {
  /// Run the reducer for `action` and notify every listener.
  pub fn dispatch(&mut self, action: A) {
    self.state = (self.reducer)(&self.state, &action);

    for (_, listener) in &mut self.listeners {
      listener(&self.state);
    }
  }

  /// Remove a listener. Returns `false` if it was already removed.
  pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
    let before = self.listeners.len();
    self.listeners.retain(|(id, _)| *id != subscription);
    self.listeners.len() != before
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.len()
  }
}

impl<S, A> StateContainer for Store<S, A> {
  type State = S;

  fn state(&self) -> &S {
    &self.state
  }

  fn subscribe(&mut self, listener: Listener<S>) -> Subscription {
    let subscription = Subscription(self.next_id);
    self.next_id += 1;
    self.listeners.push((subscription, listener));
    subscription
  }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Store")
      .field("state", &self.state)
      .field("listeners", &self.listeners.len())
      .finish_non_exhaustive()
  }
}
