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

//! Error taxonomy for CoinCodex API calls.
//!
//! Every non-2xx response becomes an [`ApiError`] tagged with an [`ApiErrorKind`].
//! A 2xx response whose body is not JSON becomes a [`RequestError`], which is a
//! separate failure kind with no status code semantics.

use std::fmt;
use thiserror::Error;

/// Placeholder message used when an error body is JSON but has no `error` field.
pub const MISSING_ERROR_FIELD_MESSAGE: &str = "Wrong json format from response.textAPI";

/// Prefix for error bodies that could not be decoded as JSON.
pub const UNPARSABLE_ERROR_PREFIX: &str = "JSON error message from coincodex: ";

/// Prefix for 2xx bodies that could not be decoded as JSON.
pub const INVALID_RESPONSE_PREFIX: &str = "Invalid Response: ";

/// The closed set of API error kinds, one per documented status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
  BadRequest,
  Unauthorized,
  PaymentRequired,
  Forbidden,
  NotFound,
  TooManyRequests,
  InternalServerError,
  /// Any other non-2xx status
  Generic,
}

/// Status codes the response router recognises, in lookup order.
///
/// `Unauthorized` is deliberately absent: a 401 routes to `Generic`.
const ROUTED_STATUSES: [(u16, ApiErrorKind); 6] = [
  (400, ApiErrorKind::BadRequest),
  (402, ApiErrorKind::PaymentRequired),
  (403, ApiErrorKind::Forbidden),
  (404, ApiErrorKind::NotFound),
  (429, ApiErrorKind::TooManyRequests),
  (500, ApiErrorKind::InternalServerError),
];

impl ApiErrorKind {
  /// Route a status code to its error kind.
  ///
  /// Returns `None` for 2xx codes. Codes missing from the routing table
  /// (including 401) map to [`ApiErrorKind::Generic`].
  pub fn route(status_code: u16) -> Option<Self> {
    if let Some((_, kind)) = ROUTED_STATUSES.iter().find(|(code, _)| *code == status_code) {
      return Some(*kind);
    }

    if (200..300).contains(&status_code) {
      None
    } else {
      Some(ApiErrorKind::Generic)
    }
  }

  /// The status code this kind is declared for, if any.
  pub fn declared_status(&self) -> Option<u16> {
    match self {
      ApiErrorKind::BadRequest => Some(400),
      ApiErrorKind::Unauthorized => Some(401),
      ApiErrorKind::PaymentRequired => Some(402),
      ApiErrorKind::Forbidden => Some(403),
      ApiErrorKind::NotFound => Some(404),
      ApiErrorKind::TooManyRequests => Some(429),
      ApiErrorKind::InternalServerError => Some(500),
      ApiErrorKind::Generic => None,
    }
  }

  /// Name used when rendering an [`ApiError`].
  pub fn name(&self) -> &'static str {
    match self {
      ApiErrorKind::BadRequest => "BadRequest",
      ApiErrorKind::Unauthorized => "Unauthorized",
      ApiErrorKind::PaymentRequired => "PaymentRequired",
      ApiErrorKind::Forbidden => "Forbidden",
      ApiErrorKind::NotFound => "NotFound",
      ApiErrorKind::TooManyRequests => "TooManyRequests",
      ApiErrorKind::InternalServerError => "InternalServerError",
      ApiErrorKind::Generic => "ApiError",
    }
  }
}

impl fmt::Display for ApiErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// The request that produced a failed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
  pub method: String,
  pub url: String,
}

impl RequestContext {
  pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
    Self { method: method.into(), url: url.into() }
  }
}

/// A non-success response from the CoinCodex API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}(status_code: {status_code}): {message}")]
pub struct ApiError {
  kind: ApiErrorKind,
  status_code: u16,
  message: String,
  body: String,
  request: Option<RequestContext>,
}

impl ApiError {
  /// Build an error from a raw response.
  ///
  /// The message is the body's `error` field when the body is a JSON object
  /// carrying one. A JSON body without it yields
  /// [`MISSING_ERROR_FIELD_MESSAGE`]; a body that is not JSON yields
  /// [`UNPARSABLE_ERROR_PREFIX`] followed by the raw text.
  pub fn from_response(
    kind: ApiErrorKind,
    status_code: u16,
    body: impl Into<String>,
    request: Option<RequestContext>,
  ) -> Self {
    let body = body.into();
    let message = extract_message(&body);
    Self { kind, status_code, message, body, request }
  }

  pub fn kind(&self) -> ApiErrorKind {
    self.kind
  }

  pub fn status_code(&self) -> u16 {
    self.status_code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  /// Raw response body as received.
  pub fn body(&self) -> &str {
    &self.body
  }

  pub fn request(&self) -> Option<&RequestContext> {
    self.request.as_ref()
  }
}

fn extract_message(body: &str) -> String {
  match serde_json::from_str::<serde_json::Value>(body) {
    Err(_) => format!("{}{}", UNPARSABLE_ERROR_PREFIX, body),
    Ok(json) => match json.get("error") {
      None => MISSING_ERROR_FIELD_MESSAGE.to_string(),
      Some(serde_json::Value::String(s)) => s.clone(),
      Some(other) => other.to_string(),
    },
  }
}

/// A 2xx response whose body could not be decoded as JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("RequestError: {message}")]
pub struct RequestError {
  message: String,
}

impl RequestError {
  /// Wrap the undecodable body text.
  pub fn invalid_response(text: &str) -> Self {
    Self { message: format!("{}{}", INVALID_RESPONSE_PREFIX, text) }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

/// The main error type for cc-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Non-2xx response from the API
  #[error(transparent)]
  Api(#[from] ApiError),

  /// 2xx response with a body that is not JSON
  #[error(transparent)]
  Request(#[from] RequestError),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Decoded JSON did not match a typed model
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),
}

impl Error {
  /// The API error, if this is one.
  pub fn as_api(&self) -> Option<&ApiError> {
    match self {
      Error::Api(e) => Some(e),
      _ => None,
    }
  }

  /// Status code of an API error.
  pub fn status_code(&self) -> Option<u16> {
    self.as_api().map(ApiError::status_code)
  }
}

/// Result type alias for cc-* crates
pub type Result<T> = std::result::Result<T, Error>;
