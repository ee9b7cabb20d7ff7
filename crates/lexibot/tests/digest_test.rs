//! crates/lexibot/tests/digest_test.rs
//!
//! Daily digest flow with a scripted dictionary client and a seeded RNG.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

use lexibot::client::DictionaryClient;
use lexibot::config::{DictionarySource, DigestSettings, Language};
use lexibot::digest::{DigestWordLists, compose_daily_digest, find_daily_word};
use lexibot::errors::FetchError;
use lexibot::wordlist::FrequencyList;

/// How the scripted client answers a word it does not know
#[derive(Clone, Copy)]
enum Fallback {
  Fail,
  Suggest,
}

/// Answers with an entry for `known` words, the fallback otherwise
struct ScriptedClient {
  known: Vec<(DictionarySource, &'static str)>,
  fallback: Fallback,
  calls: Mutex<Vec<(DictionarySource, String)>>,
}

impl ScriptedClient {
  fn new(known: Vec<(DictionarySource, &'static str)>, fallback: Fallback) -> Self {
    Self {
      known,
      fallback,
      calls: Mutex::new(Vec::new()),
    }
  }

  fn call_count(&self) -> usize {
    self.calls.lock().unwrap().len()
  }
}

fn entry_for(word: &str) -> Value {
  json!([{
    "meta": {"id": word, "offensive": false},
    "hwi": {"hw": word},
    "fl": "noun",
    "shortdef": [format!("meaning of {word}")]
  }])
}

#[async_trait]
impl DictionaryClient for ScriptedClient {
  async fn fetch_json(&self, source: DictionarySource, word: &str) -> Result<Value, FetchError> {
    self.calls.lock().unwrap().push((source, word.to_string()));
    if self.known.iter().any(|(s, w)| *s == source && *w == word) {
      return Ok(entry_for(word));
    }
    match self.fallback {
      Fallback::Fail => Err(FetchError::Status {
        dictionary: source,
        status: 500,
      }),
      Fallback::Suggest => Ok(json!(["something", "else"])),
    }
  }
}

fn settings(max_attempts: usize) -> DigestSettings {
  DigestSettings {
    pool_size: 1_000,
    rare_list_size: 1_000,
    max_attempts,
  }
}

#[tokio::test]
async fn gives_up_after_max_attempts() {
  let client = ScriptedClient::new(Vec::new(), Fallback::Fail);
  let list = FrequencyList::from_words(["quixotic", "zebra", "lantern"]);
  let mut rng = StdRng::seed_from_u64(42);

  let found = find_daily_word(&client, &list, Language::En, &settings(12), &mut rng).await;

  assert!(found.is_none());
  assert_eq!(client.call_count(), 12);
}

#[tokio::test]
async fn suggestions_are_not_accepted() {
  let client = ScriptedClient::new(Vec::new(), Fallback::Suggest);
  let list = FrequencyList::from_words(["quixotic", "zebra"]);
  let mut rng = StdRng::seed_from_u64(3);

  let found = find_daily_word(&client, &list, Language::Es, &settings(5), &mut rng).await;

  assert!(found.is_none());
  assert_eq!(client.call_count(), 5);
}

#[tokio::test]
async fn accepts_the_first_word_with_an_entry() {
  let client = ScriptedClient::new(
    vec![(DictionarySource::MerriamWebsterEnglish, "quixotic")],
    Fallback::Fail,
  );
  // Only one candidate survives the rarity filter
  let list = FrequencyList::from_words(["a", "of", "quixotic", "x-ray"]);
  let mut rng = StdRng::seed_from_u64(9);

  let found = find_daily_word(&client, &list, Language::En, &settings(3), &mut rng)
    .await
    .expect("quixotic should be found");

  assert_eq!(found.word, "quixotic");
  assert!(found.text.starts_with("Word: quixotic\n"));
  assert!(found.text.contains("    Definition 1 meaning of quixotic"));
  assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn empty_pool_makes_no_requests() {
  let client = ScriptedClient::new(Vec::new(), Fallback::Fail);
  let list = FrequencyList::from_words(["a", "of", "42"]);
  let mut rng = StdRng::seed_from_u64(0);

  let found = find_daily_word(&client, &list, Language::En, &settings(12), &mut rng).await;

  assert!(found.is_none());
  assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn digest_mixes_found_and_missing_sections() {
  let client = ScriptedClient::new(
    vec![(DictionarySource::MerriamWebsterEnglish, "quixotic")],
    Fallback::Fail,
  );
  let lists = DigestWordLists {
    english: FrequencyList::from_words(["quixotic"]),
    spanish: FrequencyList::from_words(["murciélago"]),
  };
  let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
  let mut rng = StdRng::seed_from_u64(1);

  let message = compose_daily_digest(&client, &lists, &settings(4), date, &mut rng).await;

  assert!(message.starts_with("Daily word - 16-10-2026\n\nEnglish: quixotic\nWord: quixotic\n"));
  assert!(message.ends_with("Spanish: (failed to find a word today)"));
  // one English hit, four Spanish misses
  assert_eq!(client.call_count(), 5);
}
