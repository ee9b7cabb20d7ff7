//! API configuration constants

/// Default bind address
///
/// Localhost; put the server behind a TLS-terminating proxy for Telegram.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default per-call timeout for outbound HTTP requests (seconds)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Environment variable names
pub mod vars {
  /// Merriam-Webster Collegiate API key (required)
  pub const MW_EN_KEY: &str = "MERRIAM_WEBSTER_DICT_API";
  /// Merriam-Webster Spanish-English API key (required)
  pub const MW_ES_KEY: &str = "MERRIAM_WEBSTER_SPANISH_DICT_API";
  /// Path secret of the webhook URL (required)
  pub const WEBHOOK_SECRET: &str = "WEBHOOK_SECRET";
  /// Chat receiving the daily digest (required)
  pub const BOT_OWNER_ID: &str = "BOT_OWNER_ID";
  /// Telegram bot token (required)
  pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
  /// Bind address (optional)
  pub const BIND_ADDR: &str = "LEXIBOT_BIND_ADDR";
  /// Outbound HTTP timeout in seconds (optional)
  pub const HTTP_TIMEOUT_SECS: &str = "LEXIBOT_HTTP_TIMEOUT_SECS";
  /// English frequency list path (optional, bundled list otherwise)
  pub const WORDLIST_EN: &str = "LEXIBOT_WORDLIST_EN";
  /// Spanish frequency list path (optional, bundled list otherwise)
  pub const WORDLIST_ES: &str = "LEXIBOT_WORDLIST_ES";
}
