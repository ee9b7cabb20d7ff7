// crates/lexibot/src/service.rs

//! LexiconService: turns parsed commands into reply text.
//!
//! Each lookup performs exactly one fetch. Fetch failures never escape: they
//! become a fixed sentence naming the word.

use std::sync::Arc;

use tracing::{info, warn};

use crate::client::DictionaryClient;
use crate::commands::Command;
use crate::config::{DictionarySource, Language};
use crate::formatter::{format_entries, format_free_dictionary};

/// Lookup facade shared by the webhook handler
#[derive(Clone)]
pub struct LexiconService {
  client: Arc<dyn DictionaryClient>,
}

impl LexiconService {
  /// Wraps a dictionary client.
  pub fn new(client: Arc<dyn DictionaryClient>) -> Self {
    Self { client }
  }

  /// Reply text for a command.
  pub async fn respond(&self, command: &Command) -> String {
    match command {
      Command::Lookup { source, word } => self.lookup(*source, word).await,
      other => other.static_reply().unwrap_or_default().to_string(),
    }
  }

  /// Looks `word` up in `source` and formats the result.
  pub async fn lookup(&self, source: DictionarySource, word: &str) -> String {
    match self.client.fetch_json(source, word).await {
      Ok(data) => {
        info!(%source, word, "dictionary lookup succeeded");
        match source {
          DictionarySource::FreeDictionary => format_free_dictionary(&data, word),
          DictionarySource::MerriamWebsterEnglish => format_entries(&data, Language::En),
          DictionarySource::MerriamWebsterSpanish => format_entries(&data, Language::Es),
        }
      }
      Err(e) => {
        warn!(%source, word, error = %e, "dictionary lookup failed");
        failure_message(source, word)
      }
    }
  }
}

/// User-facing sentence for a failed fetch.
pub fn failure_message(source: DictionarySource, word: &str) -> String {
  match source {
    DictionarySource::FreeDictionary => {
      format!("'{word}' is not a valid word or the API is unavailable.")
    }
    DictionarySource::MerriamWebsterEnglish => {
      format!("Failed to fetch Merriam-Webster entry for '{word}'.")
    }
    DictionarySource::MerriamWebsterSpanish => {
      format!("Failed to fetch Merriam-Webster (Spanish-English) entry for '{word}'.")
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use async_trait::async_trait;
  use serde_json::{Value, json};

  use super::*;
  use crate::errors::FetchError;

  /// Records every fetch and answers with a fixed payload (or a 503)
  struct RecordingClient {
    answer: Option<Value>,
    calls: Mutex<Vec<(DictionarySource, String)>>,
  }

  impl RecordingClient {
    fn new(answer: Option<Value>) -> Arc<Self> {
      Arc::new(Self {
        answer,
        calls: Mutex::new(Vec::new()),
      })
    }

    fn calls(&self) -> Vec<(DictionarySource, String)> {
      self.calls.lock().unwrap().clone()
    }
  }

  #[async_trait]
  impl DictionaryClient for RecordingClient {
    async fn fetch_json(&self, source: DictionarySource, word: &str) -> Result<Value, FetchError> {
      self.calls.lock().unwrap().push((source, word.to_string()));
      self.answer.clone().ok_or(FetchError::Status {
        dictionary: source,
        status: 503,
      })
    }
  }

  #[tokio::test]
  async fn static_commands_do_not_fetch() {
    let client = RecordingClient::new(None);
    let service = LexiconService::new(client.clone());

    assert_eq!(
      service.respond(&Command::Help).await,
      crate::commands::HELP_MESSAGE
    );
    assert_eq!(
      service
        .respond(&Command::SubcommandUsage(DictionarySource::MerriamWebsterEnglish))
        .await,
      "Usage: /dict mw <word>"
    );
    assert!(client.calls().is_empty());
  }

  #[tokio::test]
  async fn failed_lookups_name_the_word() {
    let client = RecordingClient::new(None);
    let service = LexiconService::new(client.clone());

    assert_eq!(
      service.lookup(DictionarySource::MerriamWebsterEnglish, "happy").await,
      "Failed to fetch Merriam-Webster entry for 'happy'."
    );
    assert_eq!(
      service.lookup(DictionarySource::MerriamWebsterSpanish, "feliz").await,
      "Failed to fetch Merriam-Webster (Spanish-English) entry for 'feliz'."
    );
    assert_eq!(
      service.lookup(DictionarySource::FreeDictionary, "qwzx").await,
      "'qwzx' is not a valid word or the API is unavailable."
    );
    assert_eq!(client.calls().len(), 3);
  }

  #[tokio::test]
  async fn lookup_fetches_once_and_formats() {
    let client = RecordingClient::new(Some(json!(["hoppy", "happen"])));
    let service = LexiconService::new(client.clone());

    let command = Command::parse("/dict mw happy");
    let reply = service.respond(&command).await;

    assert_eq!(reply, "No exact entry. Did you mean: hoppy, happen?");
    assert_eq!(
      client.calls(),
      vec![(DictionarySource::MerriamWebsterEnglish, "happy".to_string())]
    );
  }

  #[tokio::test]
  async fn free_dictionary_uses_its_own_formatter() {
    let client = RecordingClient::new(Some(json!([])));
    let service = LexiconService::new(client);
    assert_eq!(
      service.lookup(DictionarySource::FreeDictionary, "zzz").await,
      "No data returned for 'zzz'."
    );
  }
}
