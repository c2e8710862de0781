//! Coin Lookup Example
//!
//! Fetches a coin's details and a short price history, then prints a summary.
//!
//! ```text
//! cargo run -p cc-client --example coin_lookup -- BTC 2023-01-01 2023-01-31
//! ```

use cc_client::CoinCodexClient;
use cc_core::{Config, Error};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  let args: Vec<String> = env::args().skip(1).collect();
  let symbol = args.first().map(String::as_str).unwrap_or("BTC");
  let start_date = args.get(1).map(String::as_str).unwrap_or("2023-01-01");
  let end_date = args.get(2).map(String::as_str).unwrap_or("2023-01-31");

  let config = Config::from_env()?;
  let client = CoinCodexClient::new(config)?;

  match client.coins().coin_typed(symbol).await {
    Ok(coin) => {
      println!("{}", symbol);
      println!("  website:    {}", coin.website.as_deref().unwrap_or("-"));
      println!("  whitepaper: {}", coin.whitepaper.as_deref().unwrap_or("-"));
      println!("  released:   {}", coin.release_date.as_deref().unwrap_or("-"));
      if let Some(open) = coin.today_open {
        println!("  open:       ${:.4}", open);
      }
      if let Some(range) = coin.daily_range_usd() {
        println!("  24h range:  ${:.4}", range);
      }
    }
    Err(Error::Api(e)) => {
      eprintln!("{}", e);
      return Ok(());
    }
    Err(e) => return Err(e.into()),
  }

  let history = client.coins().coin_history_typed(symbol, start_date, end_date, 10).await?;
  for (coin_id, samples) in &history {
    println!("\n{} history ({} samples)", coin_id, samples.len());
    for sample in samples {
      let when = sample
        .timestamp_utc()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| sample.timestamp.to_string());
      println!("  {}  ${:>14.4}  vol ${:>18.2}", when, sample.price_usd, sample.volume_24h_usd);
    }
  }

  Ok(())
}
