//! # cc-client
//!
//! A thin client for the CoinCodex cryptocurrency price API.
//!
//! ## Features
//!
//! - **Two endpoints**: coin details and historic price series
//! - **One session per client**: base URL, headers and timeout fixed at construction
//! - **Typed errors**: every non-2xx status maps to an [`ApiErrorKind`]
//! - **Raw or typed**: decoded JSON as-is, or models from cc-models
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cc_client::CoinCodexClient;
//! use cc_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinCodexClient::new(Config::default())?;
//!
//!     let coin = client.coins().coin_typed("BTC").await?;
//!     println!("24h range: {:?}", coin.daily_range_usd());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cc_core::Error>`. Non-2xx responses are
//! `Error::Api`, undecodable 2xx bodies are `Error::Request`, and transport
//! failures (including the 10 second timeout) are `Error::Http`. Nothing is
//! retried.
//!
//! A 401 response is reported as [`ApiErrorKind::Generic`], not
//! [`ApiErrorKind::Unauthorized`].

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

pub use cc_core::{ApiError, ApiErrorKind, Config, Error, RequestError, Result, TransportOptions};
pub use cc_models::*;
pub use client::CoinCodexClient;
pub use endpoints::coins::CoinEndpoints;
pub use transport::{Payload, RequestOptions, Transport};
