//! keepstate: durable persistence for in-memory state containers
//!
//! This crate provides a store enhancer that:
//! - rehydrates a store's initial state from a key-value storage medium
//!   and merges it with the caller's initial state
//! - writes a slice of the state back to storage after every change
//! - never lets a storage, codec or merge failure reach the application;
//!   failures are logged through `tracing` and persistence degrades to a no-op
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use keepstate::config::ConfigOverrides;
//! use keepstate::enhancer::persist_state;
//! use keepstate::storage::{MemoryStorage, Storage};
//! use keepstate::store::{Reducer, StateContainer, create_store};
//!
//! #[derive(Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
//! struct Counter {
//!   count: i64,
//! }
//!
//! fn reducer() -> Reducer<Counter, i64> {
//!   Box::new(|state, delta| Counter { count: state.count + delta })
//! }
//!
//! let storage = Rc::new(MemoryStorage::new());
//!
//! let create = persist_state(Rc::clone(&storage), ["count"], ConfigOverrides::new())
//!   .enhance(create_store::<Counter, i64>);
//! let mut store = create(reducer(), None);
//! store.dispatch(5);
//! assert_eq!(storage.get_item("redux").unwrap().as_deref(), Some(r#"{"count":5}"#));
//!
//! // A new store over the same storage picks up where the last one left off.
//! let create = persist_state(Rc::clone(&storage), ["count"], ConfigOverrides::new())
//!   .enhance(create_store::<Counter, i64>);
//! let store = create(reducer(), None);
//! assert_eq!(store.state(), &Counter { count: 5 });
//! ```

pub mod codec;
pub mod config;
pub mod consts;
pub mod enhancer;
pub mod error;
pub mod merge;
pub mod persist;
pub mod rehydrate;
pub mod slicer;
pub mod storage;
pub mod store;
