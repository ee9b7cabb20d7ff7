//! Telegram Bot API messenger

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConfigError, MessagingError};

/// Default Bot API root
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Common interface for delivering chat messages
#[async_trait]
pub trait Messenger: Send + Sync {
  /// Sends one message to `chat_id`.
  ///
  /// # Errors
  /// Transport failure or rejection by the messaging API.
  async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), MessagingError>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
  chat_id: i64,
  text: &'a str,
}

#[derive(Deserialize)]
struct BotApiAnswer {
  #[serde(default)]
  description: Option<String>,
}

/// reqwest-backed `sendMessage` client
#[derive(Clone)]
pub struct TelegramMessenger {
  http: reqwest::Client,
  api_base: String,
  token: Arc<str>,
}

impl std::fmt::Debug for TelegramMessenger {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TelegramMessenger")
      .field("api_base", &self.api_base)
      .field("token", &"***")
      .finish()
  }
}

impl TelegramMessenger {
  /// Creates a messenger talking to the public Bot API.
  ///
  /// # Errors
  /// Returns an error if the token is blank or the reqwest client cannot be built.
  pub fn new(token: &str, timeout: Duration) -> Result<Self, ConfigError> {
    Self::with_api_base(token, TELEGRAM_API_BASE, timeout)
  }

  /// Creates a messenger talking to `api_base` (a local Bot API server or a test double).
  ///
  /// # Errors
  /// Returns an error if the token is blank or the reqwest client cannot be built.
  pub fn with_api_base(token: &str, api_base: &str, timeout: Duration) -> Result<Self, ConfigError> {
    if token.trim().is_empty() {
      return Err(ConfigError::EmptyCredential {
        name: "telegram_bot_token",
      });
    }
    let http = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| ConfigError::HttpClient(Arc::new(e)))?;
    Ok(Self {
      http,
      api_base: api_base.trim_end_matches('/').to_string(),
      token: Arc::from(token),
    })
  }

  fn send_message_url(&self) -> String {
    format!("{}/bot{}/sendMessage", self.api_base, self.token)
  }
}

#[async_trait]
impl Messenger for TelegramMessenger {
  async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), MessagingError> {
    debug!(chat_id, chars = text.chars().count(), "sending message");

    let response = self
      .http
      .post(self.send_message_url())
      .json(&SendMessageRequest { chat_id, text })
      .send()
      .await
      .map_err(|e| MessagingError::Request(Arc::new(e.without_url())))?;

    let status = response.status();
    if status.is_success() {
      return Ok(());
    }

    // The URL embeds the bot token, so only the Bot API description is kept.
    let description = response
      .json::<BotApiAnswer>()
      .await
      .ok()
      .and_then(|answer| answer.description)
      .unwrap_or_default();
    Err(MessagingError::Rejected {
      status: status.as_u16(),
      description,
    })
  }
}
