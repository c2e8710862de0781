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

//! HTTP transport layer for CoinCodex API requests

use cc_core::{ApiError, ApiErrorKind, Config, Endpoint, Error, RequestContext, RequestError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, Proxy};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Key/value data sent with a request, as query parameters or a form body.
pub type Payload = BTreeMap<String, String>;

/// Per-call extras layered over the session defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
  /// Headers added to this request only
  pub headers: BTreeMap<String, String>,
}

/// HTTP session for the CoinCodex API.
///
/// Built once from a [`Config`]; base URL, default headers, timeout and
/// transport settings are fixed for its lifetime.
pub struct Transport {
  client: Client,
  base_url: String,
  headers: HeaderMap,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`] for an unusable base URL, header or proxy, and
  /// [`Error::Http`] if the HTTP client cannot be built.
  pub fn new(config: &Config) -> Result<Self> {
    let base_url = config.base_url()?;
    let headers = header_map(&config.default_headers())?;
    let timeout = Duration::from_secs(config.transport.timeout_secs);

    let mut builder = Client::builder()
      .timeout(timeout)
      .default_headers(headers.clone())
      .danger_accept_invalid_certs(config.transport.danger_accept_invalid_certs);

    if let Some(proxy) = &config.transport.proxy {
      let proxy = Proxy::all(proxy)
        .map_err(|e| Error::Config(format!("Invalid proxy '{}': {}", proxy, e)))?;
      builder = builder.proxy(proxy);
    }

    let client = builder
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    debug!(base_url = %base_url, paid_tier = config.is_paid_tier(), "Created CoinCodex transport");

    Ok(Self { client, base_url, headers, timeout })
  }

  /// Issue a request and route the response.
  ///
  /// A non-empty payload goes into the query string when the method is GET or
  /// `force_query_params` is set, and into a form-encoded body otherwise.
  ///
  /// # Returns
  ///
  /// The decoded JSON body of a 2xx response. Any other status becomes an
  /// [`Error::Api`]; a 2xx body that is not JSON becomes an [`Error::Request`].
  #[instrument(skip(self, method, payload, options), fields(method = %method))]
  pub async fn execute(
    &self,
    method: Method,
    path: &str,
    payload: Option<&Payload>,
    force_query_params: bool,
    options: Option<&RequestOptions>,
  ) -> Result<Value> {
    let url = self.build_url(path);
    debug!("Making request to: {}", url);

    let mut request = self.client.request(method.clone(), &url);

    if let Some(payload) = payload.filter(|p| !p.is_empty()) {
      if method == Method::GET || force_query_params {
        request = request.query(payload);
      } else {
        request = request.form(payload);
      }
    }

    if let Some(options) = options {
      request = request.headers(header_map(&options.headers)?);
    }

    let response = request
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status().as_u16();
    debug!("Response status: {}", status);

    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    #[cfg(feature = "debug-logging")]
    tracing::trace!("Response body: {}", text);

    route_response(status, &text, Some(RequestContext::new(method.as_str(), url)))
  }

  /// GET a path with no payload.
  pub async fn get(&self, path: &str) -> Result<Value> {
    self.execute(Method::GET, path, None, false, None).await
  }

  /// GET one of the known API endpoints.
  pub async fn get_endpoint(&self, endpoint: &Endpoint) -> Result<Value> {
    self.get(&endpoint.path()).await
  }

  /// Build the full URL for an API path
  fn build_url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path.trim_start_matches('/'))
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Headers sent with every request
  pub fn default_headers(&self) -> &HeaderMap {
    &self.headers
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

/// Turn a status code and body into the decoded JSON value or an error.
pub fn route_response(status: u16, body: &str, request: Option<RequestContext>) -> Result<Value> {
  if let Some(kind) = ApiErrorKind::route(status) {
    let api_error = ApiError::from_response(kind, status, body, request);
    warn!("CoinCodex API error: {}", api_error);
    return Err(Error::Api(api_error));
  }

  serde_json::from_str::<Value>(body).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    Error::Request(RequestError::invalid_response(body))
  })
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
  let mut map = HeaderMap::with_capacity(headers.len());

  for (name, value) in headers {
    let header_name = HeaderName::from_bytes(name.as_bytes())
      .map_err(|e| Error::Config(format!("Invalid header name '{}': {}", name, e)))?;
    let mut header_value = HeaderValue::from_str(value)
      .map_err(|e| Error::Config(format!("Invalid value for header '{}': {}", name, e)))?;

    if header_name == AUTHORIZATION {
      header_value.set_sensitive(true);
    }

    map.insert(header_name, header_value);
  }

  Ok(map)
}
