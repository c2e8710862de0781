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

//! Coin price history returned by `get_coin_history`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// History keyed by the CoinCodex coin identifier.
pub type CoinHistory = HashMap<String, Vec<HistorySample>>;

/// One sample of a coin's price history.
///
/// Arrives as a 3-element JSON array `[timestamp, price_usd, volume_24h_usd]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64, f64)", into = "(i64, f64, f64)")]
pub struct HistorySample {
  /// Unix timestamp in seconds
  pub timestamp: i64,

  /// Coin price in USD
  pub price_usd: f64,

  /// 24 hour volume in USD
  pub volume_24h_usd: f64,
}

impl From<(i64, f64, f64)> for HistorySample {
  fn from((timestamp, price_usd, volume_24h_usd): (i64, f64, f64)) -> Self {
    Self { timestamp, price_usd, volume_24h_usd }
  }
}

impl From<HistorySample> for (i64, f64, f64) {
  fn from(sample: HistorySample) -> Self {
    (sample.timestamp, sample.price_usd, sample.volume_24h_usd)
  }
}

impl HistorySample {
  /// Sample time as UTC, `None` if the timestamp is out of range.
  pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(self.timestamp, 0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_history_from_json() {
    let json = r#"{
      "BTC": [
        [1672531200, 16547.5, 12000000000.0],
        [1672617600, 16625.1, 13000000000]
      ]
    }"#;

    let history: CoinHistory = serde_json::from_str(json).unwrap();
    let samples = &history["BTC"];
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].timestamp, 1672531200);
    assert_eq!(samples[1].price_usd, 16625.1);
    assert_eq!(samples[1].volume_24h_usd, 13000000000.0);
  }

  #[test]
  fn test_timestamp_utc() {
    let sample = HistorySample { timestamp: 1672531200, price_usd: 1.0, volume_24h_usd: 0.0 };
    let ts = sample.timestamp_utc().unwrap();
    assert_eq!(ts.format("%Y-%m-%d").to_string(), "2023-01-01");
  }

  #[test]
  fn test_short_sample_rejected() {
    assert!(serde_json::from_str::<HistorySample>("[1672531200, 1.0]").is_err());
  }
}
