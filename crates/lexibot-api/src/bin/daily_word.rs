//! daily-word job
//!
//! Picks one rare English and one rare Spanish word, looks both up in
//! Merriam-Webster and sends the digest to the bot owner. Meant to be run
//! once a day from cron or a systemd timer.

use std::path::Path;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lexibot::config::{DigestSettings, Language};
use lexibot::digest::{DigestWordLists, compose_daily_digest};
use lexibot::messaging::send_chunks;
use lexibot::{FrequencyList, HttpDictionaryClient, TelegramMessenger};
use lexibot_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let _ = dotenvy::dotenv();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env().context("loading configuration")?;
  let settings = DigestSettings::default();
  settings.validate().context("validating digest settings")?;

  let lists = DigestWordLists {
    english: load_word_list(config.wordlist_en.as_deref(), Language::En)?,
    spanish: load_word_list(config.wordlist_es.as_deref(), Language::Es)?,
  };
  tracing::info!(
    english = lists.english.len(),
    spanish = lists.spanish.len(),
    "word lists loaded"
  );

  let client =
    HttpDictionaryClient::new(config.dictionary_config()).context("building dictionary client")?;
  let messenger = TelegramMessenger::new(&config.telegram_bot_token, config.http_timeout)
    .context("building Telegram client")?;

  let today = chrono::Local::now().date_naive();
  let mut rng = StdRng::from_entropy();
  let message = compose_daily_digest(&client, &lists, &settings, today, &mut rng).await;

  let chunks = send_chunks(&messenger, config.owner_chat_id, &message)
    .await
    .context("sending daily digest")?;
  tracing::info!(chunks, chat_id = config.owner_chat_id, "daily digest sent");

  Ok(())
}

/// Configured list file, or the bundled list when none is set.
fn load_word_list(path: Option<&Path>, language: Language) -> anyhow::Result<FrequencyList> {
  match path {
    Some(path) => FrequencyList::from_path(path)
      .with_context(|| format!("loading {} word list", language.display_name())),
    None => {
      tracing::debug!(%language, "using bundled word list");
      Ok(FrequencyList::bundled(language))
    }
  }
}
