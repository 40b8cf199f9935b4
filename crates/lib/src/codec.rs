//! Default JSON codec for persisted blobs.
//!
//! Both functions fail on malformed input and leave the decision of what to
//! do about it to the caller.

use serde_json::Value;

/// Encode a state subset as compact JSON text.
pub fn encode_json(subset: &Value) -> anyhow::Result<String> {
  Ok(serde_json::to_string(subset)?)
}

/// Decode a persisted blob. An absent blob decodes to `null`.
pub fn decode_json(raw: Option<&str>) -> anyhow::Result<Value> {
  match raw {
    Some(raw) => Ok(serde_json::from_str(raw)?),
    None => Ok(Value::Null),
  }
}
