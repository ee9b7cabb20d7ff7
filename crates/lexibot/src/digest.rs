// crates/lexibot/src/digest.rs

//! Daily rare-word digest
//!
//! For each language a rare word is picked from its frequency list and looked
//! up in the matching Merriam-Webster dictionary. Failed attempts (empty pool,
//! fetch error, no entry) simply move on to the next word, up to
//! `max_attempts`, after which the language gets a placeholder line.

use chrono::NaiveDate;
use rand::Rng;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::DictionaryClient;
use crate::config::{DigestSettings, Language};
use crate::formatter::format_entries;
use crate::wordlist::FrequencyList;

/// Line between the English and Spanish sections.
pub const SECTION_SEPARATOR: &str = "\n***************************************************************************************\n";

/// A word accepted for the digest together with its formatted entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWord {
  /// The picked word
  pub word: String,
  /// Formatted dictionary entry
  pub text: String,
}

/// Whether a payload holds at least one real entry.
///
/// A list of suggestion strings (no exact match) is not accepted.
pub fn is_entry_list(data: &Value) -> bool {
  data
    .as_array()
    .and_then(|items| items.first())
    .is_some_and(Value::is_object)
}

/// Picks a rare word of `language` that Merriam-Webster knows.
///
/// Returns `None` when all `settings.max_attempts` attempts failed.
pub async fn find_daily_word<R>(
  client: &dyn DictionaryClient,
  words: &FrequencyList,
  language: Language,
  settings: &DigestSettings,
  rng: &mut R,
) -> Option<DailyWord>
where
  R: Rng + Send + ?Sized,
{
  let source = language.merriam_webster_source();

  for attempt in 1..=settings.max_attempts {
    let Some(word) = words.pick_random_word(settings.pool_size, settings.rare_list_size, rng) else {
      warn!(%language, "rare-word pool is empty");
      return None;
    };

    match client.fetch_json(source, word).await {
      Ok(data) if is_entry_list(&data) => {
        info!(%language, word, attempt, "daily word found");
        return Some(DailyWord {
          word: word.to_string(),
          text: format_entries(&data, language),
        });
      }
      Ok(_) => debug!(%language, word, attempt, "no exact entry, trying another word"),
      Err(e) => debug!(%language, word, attempt, error = %e, "fetch failed, trying another word"),
    }
  }

  warn!(%language, attempts = settings.max_attempts, "no daily word found");
  None
}

/// Renders the digest message.
pub fn build_daily_message(
  date: NaiveDate,
  english: Option<&DailyWord>,
  spanish: Option<&DailyWord>,
) -> String {
  let mut lines = vec![format!("Daily word - {}", date.format("%d-%m-%Y")), String::new()];
  push_section(&mut lines, Language::En, english);
  lines.push(SECTION_SEPARATOR.to_string());
  push_section(&mut lines, Language::Es, spanish);
  lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, language: Language, found: Option<&DailyWord>) {
  let label = language.display_name();
  match found {
    Some(daily) => {
      lines.push(format!("{label}: {}", daily.word));
      lines.push(daily.text.clone());
    }
    None => lines.push(format!("{label}: (failed to find a word today)")),
  }
}

/// Word lists for both digest languages
#[derive(Debug, Clone)]
pub struct DigestWordLists {
  /// English frequency list
  pub english: FrequencyList,
  /// Spanish frequency list
  pub spanish: FrequencyList,
}

/// Finds both daily words and renders the digest for `date`.
pub async fn compose_daily_digest<R>(
  client: &dyn DictionaryClient,
  lists: &DigestWordLists,
  settings: &DigestSettings,
  date: NaiveDate,
  rng: &mut R,
) -> String
where
  R: Rng + Send + ?Sized,
{
  let english = find_daily_word(client, &lists.english, Language::En, settings, rng).await;
  let spanish = find_daily_word(client, &lists.spanish, Language::Es, settings, rng).await;
  build_daily_message(date, english.as_ref(), spanish.as_ref())
}
