//! Config loading from environment variables

use std::path::PathBuf;
use std::time::Duration;

use lexibot::config::DictionaryConfig;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_HTTP_TIMEOUT_SECS, vars};
use crate::errors::ApiError;

/// Server and daily-job configuration
///
/// Loaded once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8000")
  pub bind_addr: String,
  /// Path secret of `POST /telegram/{secret}`
  pub webhook_secret: String,
  /// Telegram bot token
  pub telegram_bot_token: String,
  /// Chat receiving the daily digest
  pub owner_chat_id: i64,
  /// Merriam-Webster Collegiate API key
  pub merriam_webster_en_key: String,
  /// Merriam-Webster Spanish-English API key
  pub merriam_webster_es_key: String,
  /// Per-call timeout for outbound HTTP
  pub http_timeout: Duration,
  /// English frequency list file; `None` uses the bundled list
  pub wordlist_en: Option<PathBuf>,
  /// Spanish frequency list file; `None` uses the bundled list
  pub wordlist_es: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("bind_addr", &self.bind_addr)
      .field("webhook_secret", &"***")
      .field("telegram_bot_token", &"***")
      .field("owner_chat_id", &self.owner_chat_id)
      .field("merriam_webster_en_key", &"***")
      .field("merriam_webster_es_key", &"***")
      .field("http_timeout", &self.http_timeout)
      .field("wordlist_en", &self.wordlist_en)
      .field("wordlist_es", &self.wordlist_es)
      .finish()
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if a required variable is missing or a value is invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Loads configuration from any name → value lookup
  ///
  /// # Errors
  /// Returns an error if a required variable is missing or a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |name: &str| -> crate::errors::Result<String> {
      lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::config(format!("environment variable {name} not found")))
    };
    let optional = |name: &str| -> Option<String> {
      lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    };

    let merriam_webster_en_key = required(vars::MW_EN_KEY)?;
    let merriam_webster_es_key = required(vars::MW_ES_KEY)?;
    let webhook_secret = required(vars::WEBHOOK_SECRET)?;
    let telegram_bot_token = required(vars::TELEGRAM_BOT_TOKEN)?;

    let owner_raw = required(vars::BOT_OWNER_ID)?;
    let owner_chat_id = owner_raw.parse::<i64>().map_err(|_| {
      ApiError::config(format!(
        "{} must be an integer chat id: {owner_raw}",
        vars::BOT_OWNER_ID
      ))
    })?;

    let timeout_raw =
      optional(vars::HTTP_TIMEOUT_SECS).unwrap_or_else(|| DEFAULT_HTTP_TIMEOUT_SECS.to_string());
    let http_timeout = match timeout_raw.parse::<u64>() {
      Ok(secs) if secs > 0 => Duration::from_secs(secs),
      _ => {
        return Err(ApiError::config(format!(
          "{} must be a positive integer: {timeout_raw}",
          vars::HTTP_TIMEOUT_SECS
        )));
      }
    };

    Ok(Self {
      bind_addr: optional(vars::BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
      webhook_secret,
      telegram_bot_token,
      owner_chat_id,
      merriam_webster_en_key,
      merriam_webster_es_key,
      http_timeout,
      wordlist_en: optional(vars::WORDLIST_EN).map(PathBuf::from),
      wordlist_es: optional(vars::WORDLIST_ES).map(PathBuf::from),
    })
  }

  /// Settings for the dictionary client
  #[must_use]
  pub fn dictionary_config(&self) -> DictionaryConfig {
    let mut config =
      DictionaryConfig::new(&self.merriam_webster_en_key, &self.merriam_webster_es_key);
    config.timeout = self.http_timeout;
    config
  }
}
