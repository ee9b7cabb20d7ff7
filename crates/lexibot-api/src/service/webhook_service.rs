//! Webhook dispatch service

use std::sync::Arc;

use tracing::{debug, info, warn};

use lexibot::commands::Command;
use lexibot::messaging::{Messenger, send_chunks};
use lexibot::service::LexiconService;

use crate::models::TelegramUpdate;

/// Turns Telegram updates into replies and delivers them
///
/// Both collaborators sit behind trait objects:
/// - Production: `HttpDictionaryClient` + `TelegramMessenger`
/// - Test: recording stubs
#[derive(Clone)]
pub struct WebhookService {
  lexicon: LexiconService,
  messenger: Arc<dyn Messenger>,
}

impl WebhookService {
  /// Creates the service
  #[must_use]
  pub fn new(lexicon: LexiconService, messenger: Arc<dyn Messenger>) -> Self {
    Self { lexicon, messenger }
  }

  /// Handles one update.
  ///
  /// Returns the number of chunks delivered, or `None` when the update was
  /// ignored. Delivery failures are logged and reported as a partial count.
  pub async fn handle_update(&self, update: &TelegramUpdate) -> Option<usize> {
    let Some((chat_id, text)) = update.chat_and_text() else {
      debug!(update_id = ?update.update_id, "update without chat text ignored");
      return None;
    };

    let command = Command::parse(text);
    debug!(chat_id, ?command, "command parsed");
    let reply = self.lexicon.respond(&command).await;

    match send_chunks(self.messenger.as_ref(), chat_id, &reply).await {
      Ok(chunks) => {
        info!(chat_id, chunks, "reply delivered");
        Some(chunks)
      }
      Err(e) => {
        warn!(chat_id, error = %e, "reply delivery failed");
        Some(0)
      }
    }
  }
}
