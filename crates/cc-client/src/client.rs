/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The CoinCodex API client

use crate::endpoints::coins::CoinEndpoints;
use crate::transport::{Payload, RequestOptions, Transport};
use cc_core::{Config, Result};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Main CoinCodex API client
///
/// Owns one HTTP session for its whole lifetime. The session's base URL and
/// headers are chosen at construction: with an API key the paid tier is used
/// and the key is sent verbatim as the `Authorization` header; without one
/// the free tier is used.
///
/// # Examples
///
/// ```ignore
/// use cc_client::CoinCodexClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinCodexClient::free()?;
///
///     let coin = client.coin("BTC").await?;
///     println!("Bitcoin opened at {}", coin["today_open"]);
///
///     let history = client.coin_history("BTC", "2023-01-01", "2023-01-02", 5).await?;
///     println!("{} samples", history["BTC"].as_array().map_or(0, |s| s.len()));
///
///     Ok(())
/// }
/// ```
pub struct CoinCodexClient {
  transport: Arc<Transport>,
}

impl CoinCodexClient {
  /// Create a new CoinCodex API client
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is unusable (for example an API key
  /// without a paid-tier URL) or the HTTP client cannot be created.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use cc_client::CoinCodexClient;
  /// use cc_core::Config;
  ///
  /// let config = Config::from_env().expect("Bad configuration");
  /// let client = CoinCodexClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Free-tier client with default settings
  pub fn free() -> Result<Self> {
    Self::new(Config::default())
  }

  /// Get access to coin endpoints
  pub fn coins(&self) -> CoinEndpoints {
    CoinEndpoints::new(self.transport.clone())
  }

  /// Historic price data for a single coin. See [`CoinEndpoints::coin_history`].
  pub async fn coin_history(
    &self,
    symbol: &str,
    start_date: &str,
    end_date: &str,
    samples: u32,
  ) -> Result<Value> {
    self.coins().coin_history(symbol, start_date, end_date, samples).await
  }

  /// Coin details. See [`CoinEndpoints::coin`].
  pub async fn coin(&self, symbol: &str) -> Result<Value> {
    self.coins().coin(symbol).await
  }

  /// Issue an arbitrary request against the API. See [`Transport::execute`].
  pub async fn execute(
    &self,
    method: Method,
    path: &str,
    payload: Option<&Payload>,
    force_query_params: bool,
    options: Option<&RequestOptions>,
  ) -> Result<Value> {
    self.transport.execute(method, path, payload, force_query_params, options).await
  }

  /// Get the underlying transport
  pub fn transport(&self) -> &Transport {
    &self.transport
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cc_core::Error;

  #[test]
  fn test_free_client() {
    let client = CoinCodexClient::free().unwrap();
    assert_eq!(client.transport().base_url(), "https://coincodex.com/api");
  }

  #[test]
  fn test_paid_client_without_url() {
    let config = Config { api_key: Some("secret".to_string()), ..Config::default() };
    assert!(matches!(CoinCodexClient::new(config), Err(Error::Config(_))));
  }
}
