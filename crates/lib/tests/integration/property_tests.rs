use std::rc::Rc;

use keepstate::slicer::PathSpec;
use keepstate::storage::{MemoryStorage, Storage};
use keepstate::store::StateContainer;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

use super::common::{Entries, EntryAction, entries_store, stored_json};

fn entries() -> impl Strategy<Value = Entries> {
  prop::collection::btree_map("[a-e]{1,2}", any::<i64>(), 0..6)
}

fn keys() -> impl Strategy<Value = Vec<String>> {
  prop::collection::vec("[a-e]{1,2}", 0..4)
}

proptest! {
  #[test]
  fn absent_data_keeps_initial_state(initial in entries()) {
    let store = entries_store(MemoryStorage::new(), PathSpec::All, Some(initial.clone()));
    prop_assert_eq!(store.state(), &initial);
  }

  #[test]
  fn persisted_mapping_overlays_initial_state(initial in entries(), persisted in entries()) {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_item("redux", &serde_json::to_string(&persisted).unwrap()).unwrap();

    let store = entries_store(Rc::clone(&storage), PathSpec::All, Some(initial.clone()));

    let mut expected = initial;
    expected.extend(persisted);
    prop_assert_eq!(store.state(), &expected);
  }

  #[test]
  fn persist_then_rehydrate_is_idempotent(initial in entries(), key in "[a-e]{1,2}", value in any::<i64>()) {
    let storage = Rc::new(MemoryStorage::new());

    let mut first = entries_store(Rc::clone(&storage), PathSpec::All, Some(initial.clone()));
    first.dispatch(EntryAction::Set(key, value));
    let persisted = first.state().clone();

    // Rehydrating with the persisted state as the caller's initial state
    // gives the same state back.
    let second = entries_store(Rc::clone(&storage), PathSpec::All, Some(persisted.clone()));
    prop_assert_eq!(second.state(), &persisted);
  }

  #[test]
  fn blob_holds_exactly_the_requested_keys(
    initial in entries(),
    requested in keys(),
    key in "[a-e]{1,2}",
    value in any::<i64>(),
  ) {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = entries_store(Rc::clone(&storage), requested.clone(), Some(initial));

    store.dispatch(EntryAction::Set(key, value));

    let expected: Map<String, Value> = requested
      .iter()
      .filter_map(|k| store.state().get(k).map(|v| (k.clone(), json!(v))))
      .collect();
    prop_assert_eq!(stored_json(&*storage, "redux"), Some(Value::Object(expected)));
  }

  #[test]
  fn corrupt_blob_falls_back_exactly(initial in entries(), garbage in "[{\\[a-z:,]{1,12}") {
    prop_assume!(serde_json::from_str::<Value>(&garbage).is_err());

    let storage = Rc::new(MemoryStorage::new());
    storage.set_item("redux", &garbage).unwrap();

    let store = entries_store(Rc::clone(&storage), PathSpec::All, Some(initial.clone()));
    prop_assert_eq!(store.state(), &initial);
  }
}
