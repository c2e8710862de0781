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

//! Coin metadata and price history endpoints

use super::decode;
use crate::transport::Transport;
use cc_core::{Endpoint, Result};
use cc_models::{CoinDetails, CoinHistory};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Coin endpoints
pub struct CoinEndpoints {
  transport: Arc<Transport>,
}

impl CoinEndpoints {
  /// Create a new coin endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get historic price data for a single coin
  ///
  /// # Arguments
  ///
  /// * `symbol` - CoinCodex's internal coin id (e.g., "BTC")
  /// * `start_date` - Start of the range as `YYYY-MM-DD`
  /// * `end_date` - End of the range as `YYYY-MM-DD`
  /// * `samples` - Approximate number of samples to return
  ///
  /// Dates are passed through untouched; a malformed date is reported by the
  /// API as an error response.
  ///
  /// # Returns
  ///
  /// A JSON object mapping the coin id to an array of
  /// `[timestamp, price_usd, volume_24h_usd]` samples.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CoinCodexClient;
  /// # async fn run() -> cc_core::Result<()> {
  /// let client = CoinCodexClient::free()?;
  /// let history = client.coins().coin_history("BTC", "2023-01-01", "2023-01-31", 30).await?;
  /// println!("{}", history["BTC"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn coin_history(
    &self,
    symbol: &str,
    start_date: &str,
    end_date: &str,
    samples: u32,
  ) -> Result<Value> {
    let endpoint = Endpoint::CoinHistory {
      symbol: symbol.to_string(),
      start_date: start_date.to_string(),
      end_date: end_date.to_string(),
      samples,
    };

    self.transport.get_endpoint(&endpoint).await
  }

  /// Get all properties shown on a coin's details page
  ///
  /// # Arguments
  ///
  /// * `symbol` - CoinCodex's internal coin id (e.g., "ETH")
  ///
  /// The decoded JSON is returned as-is; fields such as `description`,
  /// `ico_price`, `price_high_24_usd`, `price_low_24_usd`, `release_date`,
  /// `social`, `today_open`, `website` and `whitepaper` are not checked.
  #[instrument(skip(self))]
  pub async fn coin(&self, symbol: &str) -> Result<Value> {
    let endpoint = Endpoint::Coin { symbol: symbol.to_string() };
    self.transport.get_endpoint(&endpoint).await
  }

  /// Same as [`coin_history`](Self::coin_history), decoded into [`CoinHistory`].
  pub async fn coin_history_typed(
    &self,
    symbol: &str,
    start_date: &str,
    end_date: &str,
    samples: u32,
  ) -> Result<CoinHistory> {
    decode(self.coin_history(symbol, start_date, end_date, samples).await?)
  }

  /// Same as [`coin`](Self::coin), decoded into [`CoinDetails`].
  pub async fn coin_typed(&self, symbol: &str) -> Result<CoinDetails> {
    decode(self.coin(symbol).await?)
  }
}
