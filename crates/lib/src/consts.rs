/// Storage key used when the caller does not configure one.
///
/// Matches the key written by the JavaScript `persistState` enhancer, so state
/// persisted by either implementation can be read back by the other.
pub const DEFAULT_KEY: &str = "redux";
