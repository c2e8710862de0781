//! # cc-core
//!
//! Shared error taxonomy, configuration and constants for the CoinCodex client.

pub mod config;
pub mod error;

pub use config::{Config, TransportOptions};
pub use error::{ApiError, ApiErrorKind, Error, RequestContext, RequestError, Result};

/// Free-tier base URL for the CoinCodex API
pub const COINCODEX_FREE_URL: &str = "https://coincodex.com/api";

/// Fixed client identification string sent as `User-Agent`
pub const USER_AGENT: &str = "coincodex/rust";

/// Headers sent with every request
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [("Accept", "application/json"), ("User-Agent", USER_AGENT)];

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The CoinCodex API paths this client calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
  /// `coincodex/get_coin_history/{symbol}/{start_date}/{end_date}/{samples}`
  CoinHistory { symbol: String, start_date: String, end_date: String, samples: u32 },

  /// `coincodex/get_coin/{symbol}`
  Coin { symbol: String },
}

impl Endpoint {
  /// Path relative to the base URL. Segments are interpolated verbatim.
  pub fn path(&self) -> String {
    self.to_string()
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::CoinHistory { symbol, start_date, end_date, samples } => write!(
        f,
        "coincodex/get_coin_history/{}/{}/{}/{}",
        symbol, start_date, end_date, samples
      ),
      Endpoint::Coin { symbol } => write!(f, "coincodex/get_coin/{}", symbol),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_coin_history_path() {
    let endpoint = Endpoint::CoinHistory {
      symbol: "bitcoin".to_string(),
      start_date: "2023-01-01".to_string(),
      end_date: "2023-01-02".to_string(),
      samples: 5,
    };
    assert_eq!(endpoint.path(), "coincodex/get_coin_history/bitcoin/2023-01-01/2023-01-02/5");
  }

  #[test]
  fn test_coin_path() {
    let endpoint = Endpoint::Coin { symbol: "eth".to_string() };
    assert_eq!(endpoint.path(), "coincodex/get_coin/eth");
  }

  #[test]
  fn test_dates_are_not_validated() {
    let endpoint = Endpoint::CoinHistory {
      symbol: "btc".to_string(),
      start_date: "yesterday".to_string(),
      end_date: "2023-13-45".to_string(),
      samples: 0,
    };
    assert_eq!(endpoint.path(), "coincodex/get_coin_history/btc/yesterday/2023-13-45/0");
  }
}
