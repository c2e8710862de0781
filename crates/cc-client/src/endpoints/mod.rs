//! CoinCodex endpoint groups
//!
//! Each group borrows the client's shared [`Transport`](crate::transport::Transport)
//! and exposes one method per API call.

pub mod coins;

use cc_core::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Convert a decoded JSON value into a typed model.
pub(crate) fn decode<T>(value: Value) -> Result<T>
where
  T: DeserializeOwned,
{
  Ok(serde_json::from_value(value)?)
}
