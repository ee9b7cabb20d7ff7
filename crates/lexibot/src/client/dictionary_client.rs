//! Dictionary HTTP clients

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::config::{DictionaryConfig, DictionarySource};
use crate::errors::{ConfigError, FetchError};

/// Common interface for fetching raw dictionary JSON
///
/// Lets the webhook and the daily job swap the production client
/// (`HttpDictionaryClient`) for test stubs.
#[async_trait]
pub trait DictionaryClient: Send + Sync {
  /// Fetches the raw JSON document for `word` from `source`.
  ///
  /// # Errors
  /// Transport failure, non-success HTTP status or a body that is not JSON.
  async fn fetch_json(&self, source: DictionarySource, word: &str) -> Result<Value, FetchError>;
}

/// reqwest-backed client for dictionaryapi.dev and Merriam-Webster
#[derive(Clone)]
pub struct HttpDictionaryClient {
  http: reqwest::Client,
  config: Arc<DictionaryConfig>,
}

impl HttpDictionaryClient {
  /// Builds the client with the configured per-call timeout.
  ///
  /// # Errors
  /// Returns an error if a key is blank or the reqwest client cannot be built.
  pub fn new(config: DictionaryConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    let http = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| ConfigError::HttpClient(Arc::new(e)))?;
    Ok(Self {
      http,
      config: Arc::new(config),
    })
  }

  /// Request URL for `word`: the word is one percent-encoded path segment,
  /// Merriam-Webster requests carry `?key=`.
  pub fn request_url(&self, source: DictionarySource, word: &str) -> Result<Url, FetchError> {
    let base = self.config.endpoints.base_for(source);
    let invalid = || FetchError::InvalidEndpoint {
      dictionary: source,
      base: base.to_string(),
    };

    let mut url = Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut().map_err(|()| invalid())?.pop_if_empty().push(word);
    if let Some(key) = self.config.key_for(source) {
      url.query_pairs_mut().append_pair("key", key);
    }
    Ok(url)
  }
}

#[async_trait]
impl DictionaryClient for HttpDictionaryClient {
  async fn fetch_json(&self, source: DictionarySource, word: &str) -> Result<Value, FetchError> {
    let url = self.request_url(source, word)?;
    debug!(%source, word, "fetching dictionary entry");

    // Merriam-Webster URLs carry the API key, so errors drop the URL.
    let response = self.http.get(url).send().await.map_err(|e| FetchError::Request {
      dictionary: source,
      error: Arc::new(e.without_url()),
    })?;

    let status = response.status();
    if !status.is_success() {
      return Err(FetchError::Status {
        dictionary: source,
        status: status.as_u16(),
      });
    }

    response.json::<Value>().await.map_err(|e| FetchError::Decode {
      dictionary: source,
      error: Arc::new(e.without_url()),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::DictionaryEndpoints;

  fn client() -> HttpDictionaryClient {
    HttpDictionaryClient::new(DictionaryConfig::new("en-key", "es-key")).unwrap()
  }

  #[test]
  fn free_dictionary_url_has_no_key() {
    let url = client().request_url(DictionarySource::FreeDictionary, "hello").unwrap();
    assert_eq!(
      url.as_str(),
      "https://api.dictionaryapi.dev/api/v2/entries/en/hello"
    );
  }

  #[test]
  fn merriam_webster_urls_carry_their_key() {
    let en = client().request_url(DictionarySource::MerriamWebsterEnglish, "happy").unwrap();
    assert_eq!(
      en.as_str(),
      "https://www.dictionaryapi.com/api/v3/references/collegiate/json/happy?key=en-key"
    );

    let es = client().request_url(DictionarySource::MerriamWebsterSpanish, "gato").unwrap();
    assert_eq!(
      es.as_str(),
      "https://www.dictionaryapi.com/api/v3/references/spanish/json/gato?key=es-key"
    );
  }

  #[test]
  fn word_is_a_single_encoded_segment() {
    let url = client()
      .request_url(DictionarySource::MerriamWebsterEnglish, "ice cream/x")
      .unwrap();
    assert!(url.path().ends_with("/json/ice%20cream%2Fx"));
  }

  #[test]
  fn invalid_endpoint_is_reported() {
    let mut config = DictionaryConfig::new("en-key", "es-key");
    config.endpoints = DictionaryEndpoints {
      free_dictionary: "not a url".to_string(),
      ..DictionaryEndpoints::default()
    };
    let client = HttpDictionaryClient::new(config).unwrap();
    assert!(matches!(
      client.request_url(DictionarySource::FreeDictionary, "hello"),
      Err(FetchError::InvalidEndpoint { .. })
    ));
  }

  #[test]
  fn blank_key_is_rejected() {
    assert!(HttpDictionaryClient::new(DictionaryConfig::new("", "es-key")).is_err());
  }
}
