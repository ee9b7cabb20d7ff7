//! API error definitions
//!
//! Only startup can fail: the webhook itself always acknowledges.

use thiserror::Error;

use lexibot::errors::ConfigError;

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// Maps core settings errors onto API errors
///
/// A reqwest client that cannot be built is an environment problem, not a
/// settings mistake.
impl From<ConfigError> for ApiError {
  fn from(err: ConfigError) -> Self {
    match err {
      ConfigError::HttpClient(_) => ApiError::internal(format!("http client error: {err}")),
      _ => ApiError::config(err.to_string()),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
