//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::config::DictionarySource;

/// Errors raised while validating core settings
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// digest.pool_size < 1
  #[error("pool_size must be at least 1: actual={actual}")]
  InvalidPoolSize {
    /// Value actually specified
    actual: usize,
  },

  /// digest.rare_list_size < 1
  #[error("rare_list_size must be at least 1: actual={actual}")]
  InvalidRareListSize {
    /// Value actually specified
    actual: usize,
  },

  /// digest.max_attempts < 1
  #[error("max_attempts must be at least 1: actual={actual}")]
  InvalidMaxAttempts {
    /// Value actually specified
    actual: usize,
  },

  /// A required key or token is empty
  #[error("{name} must not be empty")]
  EmptyCredential {
    /// Name of the credential
    name: &'static str,
  },

  /// reqwest could not build its client (TLS backend, etc.)
  #[error("failed to build HTTP client: {0}")]
  HttpClient(Arc<reqwest::Error>),
}

/// Errors raised while fetching a dictionary entry
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum FetchError {
  /// The endpoint base could not be turned into a request URL
  #[error("invalid endpoint for {dictionary:?}: {base}")]
  InvalidEndpoint {
    /// Dictionary the request was meant for
    dictionary: DictionarySource,
    /// Configured base URL
    base: String,
  },

  /// Transport failure (DNS, TLS, timeout, ...)
  #[error("request to {dictionary:?} failed: {error}")]
  Request {
    /// Dictionary the request was sent to
    dictionary: DictionarySource,
    /// Underlying reqwest error
    #[source]
    error: Arc<reqwest::Error>,
  },

  /// Non-success HTTP status
  #[error("{dictionary:?} answered with HTTP {status}")]
  Status {
    /// Dictionary the request was sent to
    dictionary: DictionarySource,
    /// Status code returned
    status: u16,
  },

  /// The body was not valid JSON
  #[error("{dictionary:?} returned a body that is not JSON: {error}")]
  Decode {
    /// Dictionary the request was sent to
    dictionary: DictionarySource,
    /// Underlying reqwest error
    #[source]
    error: Arc<reqwest::Error>,
  },
}

/// Errors raised while delivering chat messages
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum MessagingError {
  /// Transport failure
  #[error("sendMessage request failed: {0}")]
  Request(Arc<reqwest::Error>),

  /// Telegram rejected the message
  #[error("sendMessage answered with HTTP {status}: {description}")]
  Rejected {
    /// Status code returned
    status: u16,
    /// `description` field of the Bot API answer, if any
    description: String,
  },
}

/// Errors raised while loading a frequency word list
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WordListError {
  /// The file could not be read
  #[error("failed to read word list: path={path:?}, error={source}")]
  Io {
    /// Path that was read
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The file held no words
  #[error("word list is empty: path={path:?}")]
  Empty {
    /// Path that was read
    path: PathBuf,
  },
}
