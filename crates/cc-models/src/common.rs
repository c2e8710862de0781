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

//! Helpers shared by the CoinCodex response models

use serde::{de::Error as DeError, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Flexible {
  Number(f64),
  Text(String),
}

/// Deserialize a price that may arrive as a JSON number, a numeric string,
/// an empty string or `null`.
pub fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<Flexible>::deserialize(deserializer)? {
    None => Ok(None),
    Some(Flexible::Number(n)) => Ok(Some(n)),
    Some(Flexible::Text(s)) => {
      let trimmed = s.trim();
      if trimmed.is_empty() {
        Ok(None)
      } else {
        trimmed.parse::<f64>().map(Some).map_err(D::Error::custom)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;

  #[derive(Deserialize)]
  struct Price {
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    value: Option<f64>,
  }

  #[test]
  fn test_number_and_string_prices() {
    let p: Price = serde_json::from_str(r#"{"value": 1.5}"#).unwrap();
    assert_eq!(p.value, Some(1.5));

    let p: Price = serde_json::from_str(r#"{"value": "2.25"}"#).unwrap();
    assert_eq!(p.value, Some(2.25));
  }

  #[test]
  fn test_missing_and_empty_prices() {
    let p: Price = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(p.value, None);

    let p: Price = serde_json::from_str(r#"{"value": null}"#).unwrap();
    assert_eq!(p.value, None);

    let p: Price = serde_json::from_str(r#"{"value": ""}"#).unwrap();
    assert_eq!(p.value, None);
  }

  #[test]
  fn test_garbage_price_is_an_error() {
    assert!(serde_json::from_str::<Price>(r#"{"value": "n/a"}"#).is_err());
  }
}
