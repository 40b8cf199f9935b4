//! Persistence configuration.
//!
//! Every plug point has a default. Callers describe only what they want to
//! change with a sparse [`ConfigOverrides`], and [`Config::resolve`] fills in
//! the rest field by field. Overrides are not validated; a misbehaving hook
//! surfaces as an error at its first use in the pipeline.

use std::fmt;

use serde_json::Value;

use crate::codec::{decode_json, encode_json};
use crate::consts::DEFAULT_KEY;
use crate::merge::merge_state;
use crate::slicer::{PathSpec, Slicer, create_slicer};

/// `(initial, persisted) -> merged`
pub type MergeFn = Box<dyn Fn(Value, Value) -> anyhow::Result<Value>>;

/// `(paths) -> (state) -> subset`. A custom factory receives the path spec
/// but is free to ignore it.
pub type SlicerFactory = Box<dyn Fn(&PathSpec) -> Slicer>;

/// `(subset) -> blob`
pub type EncodeFn = Box<dyn Fn(&Value) -> anyhow::Result<String>>;

/// `(blob) -> subset`. Receives `None` when nothing is stored.
pub type DecodeFn = Box<dyn Fn(Option<&str>) -> anyhow::Result<Value>>;

/// Fully resolved configuration. Immutable once built.
pub struct Config {
  key: String,
  merge: MergeFn,
  slicer: SlicerFactory,
  encode: EncodeFn,
  decode: DecodeFn,
}

impl Config {
  /// Build a configuration, taking each field from `overrides` when set and
  /// from the defaults otherwise.
  pub fn resolve(overrides: ConfigOverrides) -> Self {
    let ConfigOverrides {
      key,
      merge,
      slicer,
      encode,
      decode,
    } = overrides;

    Self {
      key: key.unwrap_or_else(|| DEFAULT_KEY.to_string()),
      merge: merge.unwrap_or_else(|| Box::new(default_merge)),
      slicer: slicer.unwrap_or_else(|| Box::new(create_slicer)),
      encode: encode.unwrap_or_else(|| Box::new(encode_json)),
      decode: decode.unwrap_or_else(|| Box::new(decode_json)),
    }
  }

  /// Storage key the state is persisted under.
  pub fn key(&self) -> &str {
    &self.key
  }

  /// Combine the initial state with what was read back from storage.
  pub fn merge(&self, initial: Value, persisted: Value) -> anyhow::Result<Value> {
    (self.merge)(initial, persisted)
  }

  /// Build the slicing function for `paths`.
  pub fn slicer(&self, paths: &PathSpec) -> Slicer {
    (self.slicer)(paths)
  }

  /// Serialize a state subset for storage.
  pub fn encode(&self, subset: &Value) -> anyhow::Result<String> {
    (self.encode)(subset)
  }

  /// Parse a stored blob. `None` means nothing was stored.
  pub fn decode(&self, raw: Option<&str>) -> anyhow::Result<Value> {
    (self.decode)(raw)
  }
}

fn default_merge(initial: Value, persisted: Value) -> anyhow::Result<Value> {
  Ok(merge_state(initial, persisted))
}

impl Default for Config {
  fn default() -> Self {
    Self::resolve(ConfigOverrides::default())
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config").field("key", &self.key).finish_non_exhaustive()
  }
}

/// Caller-supplied partial configuration.
#[derive(Default)]
pub struct ConfigOverrides {
  pub key: Option<String>,
  pub merge: Option<MergeFn>,
  pub slicer: Option<SlicerFactory>,
  pub encode: Option<EncodeFn>,
  pub decode: Option<DecodeFn>,
}

impl ConfigOverrides {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn key(mut self, key: impl Into<String>) -> Self {
    self.key = Some(key.into());
    self
  }

  pub fn merge(mut self, merge: impl Fn(Value, Value) -> anyhow::Result<Value> + 'static) -> Self {
    self.merge = Some(Box::new(merge));
    self
  }

  pub fn slicer(mut self, slicer: impl Fn(&PathSpec) -> Slicer + 'static) -> Self {
    self.slicer = Some(Box::new(slicer));
    self
  }

  pub fn encode(mut self, encode: impl Fn(&Value) -> anyhow::Result<String> + 'static) -> Self {
    self.encode = Some(Box::new(encode));
    self
  }

  pub fn decode(mut self, decode: impl Fn(Option<&str>) -> anyhow::Result<Value> + 'static) -> Self {
    self.decode = Some(Box::new(decode));
    self
  }
}

impl fmt::Debug for ConfigOverrides {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConfigOverrides")
      .field("key", &self.key)
      .field("merge", &self.merge.is_some())
      .field("slicer", &self.slicer.is_some())
      .field("encode", &self.encode.is_some())
      .field("decode", &self.decode.is_some())
      .finish()
  }
}
