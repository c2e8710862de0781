//! # cc-models
//!
//! Typed views of CoinCodex API responses.
//!
//! The client returns decoded JSON as-is; these types are an optional layer
//! for callers who want named fields.
//!
//! ## Usage
//!
//! ```ignore
//! use cc_models::{CoinDetails, CoinHistory};
//!
//! let coin: CoinDetails = serde_json::from_value(raw_coin)?;
//! let history: CoinHistory = serde_json::from_value(raw_history)?;
//! ```

#![warn(clippy::all)]

pub mod coin;
pub mod common;
pub mod history;

pub use coin::CoinDetails;
pub use history::{CoinHistory, HistorySample};
