//! Selecting which part of the state gets persisted.

use serde_json::{Map, Value};

/// Which top-level keys of the state to persist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PathSpec {
  /// Persist the whole state.
  #[default]
  All,
  /// Persist the value at a single key.
  Key(String),
  /// Persist an object holding exactly these keys.
  Keys(Vec<String>),
}

impl From<&str> for PathSpec {
  fn from(key: &str) -> Self {
    PathSpec::Key(key.to_string())
  }
}

impl From<String> for PathSpec {
  fn from(key: String) -> Self {
    PathSpec::Key(key)
  }
}

impl From<Vec<String>> for PathSpec {
  fn from(keys: Vec<String>) -> Self {
    PathSpec::Keys(keys)
  }
}

impl From<Vec<&str>> for PathSpec {
  fn from(keys: Vec<&str>) -> Self {
    PathSpec::Keys(keys.into_iter().map(str::to_string).collect())
  }
}

impl From<&[&str]> for PathSpec {
  fn from(keys: &[&str]) -> Self {
    PathSpec::Keys(keys.iter().map(|k| k.to_string()).collect())
  }
}

impl<const N: usize> From<[&str; N]> for PathSpec {
  fn from(keys: [&str; N]) -> Self {
    PathSpec::Keys(keys.iter().map(|k| k.to_string()).collect())
  }
}

impl<P: Into<PathSpec>> From<Option<P>> for PathSpec {
  fn from(paths: Option<P>) -> Self {
    paths.map(Into::into).unwrap_or_default()
  }
}

/// Extracts the persisted subset from a full state value.
pub type Slicer = Box<dyn Fn(&Value) -> anyhow::Result<Value>>;

/// Build the default slicer for `paths`.
///
/// - [`PathSpec::All`]: the entire state.
/// - [`PathSpec::Key`]: the value at that key, `null` if the key is absent or
///   the state is not an object.
/// - [`PathSpec::Keys`]: an object with exactly the requested keys that exist
///   in the state; missing keys are omitted.
pub fn create_slicer(paths: &PathSpec) -> Slicer {
  match paths {
    PathSpec::All => Box::new(|state| Ok(state.clone())),
    PathSpec::Key(key) => {
      let key = key.clone();
      Box::new(move |state| Ok(state.get(key.as_str()).cloned().unwrap_or(Value::Null)))
    }
    PathSpec::Keys(keys) => {
      let keys = keys.clone();
      Box::new(move |state| Ok(Value::Object(subset(state, &keys))))
    }
  }
}

fn subset(state: &Value, keys: &[String]) -> Map<String, Value> {
  let Some(state) = state.as_object() else {
    return Map::new();
  };

  keys
    .iter()
    .filter_map(|key| state.get(key).map(|value| (key.clone(), value.clone())))
    .collect()
}
