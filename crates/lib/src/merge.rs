//! Default merge strategy for rehydrated state.

use serde_json::{Map, Value};

/// Combine the caller's initial state with a decoded persisted subset.
///
/// - `null` persisted data means nothing was stored: `initial` is returned as is.
/// - A persisted object is spread over `initial`: persisted keys win, every
///   other key of `initial` passes through. A non-object `initial` contributes
///   no keys.
/// - Any other persisted value replaces `initial` entirely.
pub fn merge_state(initial: Value, persisted: Value) -> Value {
  match persisted {
    Value::Null => initial,
    Value::Object(persisted) => {
      let mut merged = match initial {
        Value::Object(initial) => initial,
        _ => Map::new(),
      };
      merged.extend(persisted);
      Value::Object(merged)
    }
    other => other,
  }
}
