/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

//! Configuration management for the CoinCodex client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use tracing::debug;
use url::Url;

/// Transport settings applied to every request made by a client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransportOptions {
  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Proxy URL used for all schemes
  pub proxy: Option<String>,

  /// Skip TLS certificate verification
  pub danger_accept_invalid_certs: bool,

  /// Headers added on top of the defaults
  pub extra_headers: BTreeMap<String, String>,
}

impl Default for TransportOptions {
  fn default() -> Self {
    Self {
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      proxy: None,
      danger_accept_invalid_certs: false,
      extra_headers: BTreeMap::new(),
    }
  }
}

/// Session configuration for a CoinCodex client.
///
/// The base URL is selected by whether a credential is present: the paid tier
/// when `api_key` is set, the free tier otherwise. The paid-tier URL has no
/// built-in value and must be supplied by the caller.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
  /// Credential sent verbatim as the `Authorization` header
  pub api_key: Option<String>,

  /// Paid-tier base URL
  pub pro_base_url: Option<String>,

  /// Free-tier base URL
  pub free_base_url: String,

  /// Transport settings
  pub transport: TransportOptions,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      api_key: None,
      pro_base_url: None,
      free_base_url: crate::COINCODEX_FREE_URL.to_string(),
      transport: TransportOptions::default(),
    }
  }
}

// Hand-written so the credential never ends up in logs.
impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("pro_base_url", &self.pro_base_url)
      .field("free_base_url", &self.free_base_url)
      .field("transport", &self.transport)
      .finish()
  }
}

impl Config {
  /// Paid-tier configuration with a credential and its base URL.
  pub fn with_api_key(api_key: impl Into<String>, pro_base_url: impl Into<String>) -> Self {
    Config {
      api_key: Some(api_key.into()),
      pro_base_url: Some(pro_base_url.into()),
      ..Config::default()
    }
  }

  /// Replace the transport settings.
  pub fn with_transport(mut self, transport: TransportOptions) -> Self {
    self.transport = transport;
    self
  }

  /// Point the free tier somewhere else (mock servers, mirrors).
  pub fn with_free_base_url(mut self, url: impl Into<String>) -> Self {
    self.free_base_url = url.into();
    self
  }

  /// Load configuration from environment variables
  ///
  /// Every variable is optional:
  /// `COINCODEX_API_KEY`, `COINCODEX_PRO_URL`, `COINCODEX_BASE_URL`,
  /// `COINCODEX_TIMEOUT_SECS`, `COINCODEX_PROXY`.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let mut config = Config::default();

    config.api_key = env::var("COINCODEX_API_KEY").ok().filter(|k| !k.is_empty());
    config.pro_base_url = env::var("COINCODEX_PRO_URL").ok().filter(|u| !u.is_empty());

    if let Ok(base_url) = env::var("COINCODEX_BASE_URL") {
      config.free_base_url = base_url;
    }

    if let Ok(timeout) = env::var("COINCODEX_TIMEOUT_SECS") {
      config.transport.timeout_secs = timeout
        .parse()
        .map_err(|_| Error::Config("Invalid COINCODEX_TIMEOUT_SECS".to_string()))?;
    }

    config.transport.proxy = env::var("COINCODEX_PROXY").ok().filter(|p| !p.is_empty());

    debug!(paid_tier = config.is_paid_tier(), "Loaded CoinCodex configuration from environment");
    Ok(config)
  }

  /// The credential, if one was supplied. An empty key counts as none.
  pub fn credential(&self) -> Option<&str> {
    self.api_key.as_deref().filter(|k| !k.is_empty())
  }

  /// Whether a non-empty credential was supplied.
  pub fn is_paid_tier(&self) -> bool {
    self.credential().is_some()
  }

  /// The base URL for this configuration, without a trailing slash.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`] when a credential is set but no paid-tier URL
  /// was supplied, or when the selected URL does not parse.
  pub fn base_url(&self) -> Result<String> {
    let selected = if self.is_paid_tier() {
      self.pro_base_url.as_deref().ok_or_else(|| {
        Error::Config("an API key was supplied but no paid-tier base URL is configured".to_string())
      })?
    } else {
      self.free_base_url.as_str()
    };

    Url::parse(selected)
      .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", selected, e)))?;

    Ok(selected.trim_end_matches('/').to_string())
  }

  /// Default headers for every request, including the credential when present.
  ///
  /// The credential is inserted as-is with no `Bearer`/`Basic` prefix.
  pub fn default_headers(&self) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = crate::DEFAULT_HEADERS
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();

    // Authorization is reserved for the credential in any spelling.
    for (name, value) in &self.transport.extra_headers {
      if !name.eq_ignore_ascii_case("authorization") {
        headers.insert(name.clone(), value.clone());
      }
    }

    if let Some(key) = self.credential() {
      headers.insert("Authorization".to_string(), key.to_string());
    }

    headers
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  fn test_free_tier_defaults() {
    let config = Config::default();
    assert!(!config.is_paid_tier());
    assert_eq!(config.base_url().unwrap(), "https://coincodex.com/api");
    assert_eq!(config.transport.timeout_secs, 10);

    let headers = config.default_headers();
    assert_eq!(headers.get("Accept").map(String::as_str), Some("application/json"));
    assert_eq!(headers.get("User-Agent").map(String::as_str), Some("coincodex/rust"));
    assert!(!headers.contains_key("Authorization"));
  }

  #[test]
  fn test_paid_tier_uses_raw_credential() {
    let config = Config::with_api_key("secret", "https://pro.example.test/api/");
    assert_eq!(config.base_url().unwrap(), "https://pro.example.test/api");
    assert_eq!(
      config.default_headers().get("Authorization").map(String::as_str),
      Some("secret")
    );
  }

  #[test]
  fn test_paid_tier_without_url_is_rejected() {
    let config = Config { api_key: Some("secret".to_string()), ..Config::default() };
    assert!(matches!(config.base_url(), Err(Error::Config(_))));
  }

  #[test]
  fn test_empty_credential_is_free_tier() {
    let config = Config { api_key: Some(String::new()), ..Config::default() };
    assert!(!config.is_paid_tier());
    assert_eq!(config.base_url().unwrap(), "https://coincodex.com/api");
    assert!(!config.default_headers().contains_key("Authorization"));

    let config = Config::with_api_key("", "https://pro.example.test");
    assert_eq!(config.base_url().unwrap(), "https://coincodex.com/api");
  }

  #[test]
  fn test_extra_headers_cannot_replace_credential() {
    let mut transport = TransportOptions::default();
    transport.extra_headers.insert("authorization".to_string(), "spoofed".to_string());
    transport.extra_headers.insert("AUTHORIZATION".to_string(), "spoofed".to_string());
    transport.extra_headers.insert("X-Client".to_string(), "demo".to_string());

    let config = Config::with_api_key("secret", "https://pro.example.test").with_transport(transport);
    let headers = config.default_headers();
    let auth: Vec<_> =
      headers.iter().filter(|(k, _)| k.eq_ignore_ascii_case("authorization")).collect();
    assert_eq!(auth.len(), 1);
    assert_eq!(auth[0].1, "secret");
    assert_eq!(headers.get("X-Client").map(String::as_str), Some("demo"));

    let free = Config::default().with_transport(config.transport.clone());
    assert!(!free.default_headers().keys().any(|k| k.eq_ignore_ascii_case("authorization")));
  }

  #[test]
  fn test_partial_config_deserializes() {
    let config: Config = serde_json::from_str(r#"{"api_key": "k"}"#).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("k"));
    assert_eq!(config.free_base_url, "https://coincodex.com/api");
    assert_eq!(config.transport, TransportOptions::default());

    let config: Config = serde_json::from_str(r#"{"transport": {"timeout_secs": 30}}"#).unwrap();
    assert_eq!(config.transport.timeout_secs, 30);
    assert!(config.transport.proxy.is_none());
    assert!(config.api_key.is_none());
  }

  #[test]
  fn test_invalid_base_url() {
    let config = Config::default().with_free_base_url("not a url");
    assert!(matches!(config.base_url(), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_redacts_credential() {
    let config = Config::with_api_key("secret", "https://pro.example.test");
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("<redacted>"));
  }

  #[test]
  #[serial]
  fn test_config_from_env() {
    env::set_var("COINCODEX_API_KEY", "env_key");
    env::set_var("COINCODEX_PRO_URL", "https://pro.example.test");
    env::set_var("COINCODEX_TIMEOUT_SECS", "25");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key.as_deref(), Some("env_key"));
    assert_eq!(config.transport.timeout_secs, 25);
    env::remove_var("COINCODEX_API_KEY");
    env::remove_var("COINCODEX_PRO_URL");
    env::remove_var("COINCODEX_TIMEOUT_SECS");
  }

  #[test]
  #[serial]
  fn test_config_from_env_bad_timeout() {
    env::set_var("COINCODEX_TIMEOUT_SECS", "soon");
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));
    env::remove_var("COINCODEX_TIMEOUT_SECS");
  }
}
