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

//! Coin details returned by `get_coin`

use crate::common::deserialize_optional_f64;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Properties of a single coin as shown on its details page.
///
/// Every documented field is optional; anything else the API sends is kept
/// in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoinDetails {
  /// Short HTML description
  #[serde(default)]
  pub description: Option<String>,

  /// Coin start price in USD
  #[serde(default, deserialize_with = "deserialize_optional_f64")]
  pub ico_price: Option<f64>,

  /// Highest price in the last 24 hours in USD
  #[serde(default, deserialize_with = "deserialize_optional_f64")]
  pub price_high_24_usd: Option<f64>,

  /// Lowest price in the last 24 hours in USD
  #[serde(default, deserialize_with = "deserialize_optional_f64")]
  pub price_low_24_usd: Option<f64>,

  /// Release date as `YYYY-MM-DD`
  #[serde(default)]
  pub release_date: Option<String>,

  /// Platform name to URL
  #[serde(default)]
  pub social: Option<HashMap<String, String>>,

  /// Today's open price in USD
  #[serde(default, deserialize_with = "deserialize_optional_f64")]
  pub today_open: Option<f64>,

  #[serde(default)]
  pub website: Option<String>,

  #[serde(default)]
  pub whitepaper: Option<String>,

  /// Fields not modelled above
  #[serde(flatten)]
  pub extra: HashMap<String, serde_json::Value>,
}

impl CoinDetails {
  /// 24 hour high/low spread in USD when both ends are known.
  pub fn daily_range_usd(&self) -> Option<f64> {
    match (self.price_high_24_usd, self.price_low_24_usd) {
      (Some(high), Some(low)) => Some(high - low),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_coin_details_from_json() {
    let json = r#"{
      "symbol": "BTC",
      "description": "<p>Bitcoin</p>",
      "ico_price": 0,
      "price_high_24_usd": "27100.5",
      "price_low_24_usd": 26500.5,
      "release_date": "2009-01-03",
      "social": {"twitter": "https://twitter.com/bitcoin"},
      "today_open": 26800,
      "website": "https://bitcoin.org",
      "whitepaper": "https://bitcoin.org/bitcoin.pdf"
    }"#;

    let coin: CoinDetails = serde_json::from_str(json).unwrap();
    assert_eq!(coin.ico_price, Some(0.0));
    assert_eq!(coin.price_high_24_usd, Some(27100.5));
    assert_eq!(coin.daily_range_usd(), Some(600.0));
    assert_eq!(coin.release_date.as_deref(), Some("2009-01-03"));
    assert_eq!(coin.social.as_ref().unwrap()["twitter"], "https://twitter.com/bitcoin");
    assert_eq!(coin.extra["symbol"], "BTC");
  }

  #[test]
  fn test_sparse_coin_details() {
    let coin: CoinDetails = serde_json::from_str(r#"{"release_date": null}"#).unwrap();
    assert_eq!(coin, CoinDetails::default());
    assert_eq!(coin.daily_range_usd(), None);
  }
}
