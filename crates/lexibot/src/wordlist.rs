//! Word frequency lists and the random rare-word picker
//!
//! A list file holds one word per line, most frequent first. Anything after
//! the first tab or space on a line (a count, a score) is ignored and blank
//! lines are skipped, so both plain exports and `word<TAB>count` files load.
//!
//! Each language also ships a curated list of uncommon vocabulary compiled
//! into the crate, used when no list file is configured.

use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::Language;
use crate::errors::WordListError;

const BUNDLED_EN: &str = include_str!("../data/wordlist_en.txt");
const BUNDLED_ES: &str = include_str!("../data/wordlist_es.txt");

/// Words shorter than this are never picked.
const MIN_WORD_CHARS: usize = 3;

/// Words of one language ordered from most to least frequent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyList {
  words: Vec<String>,
}

impl FrequencyList {
  /// Builds a list from words already ordered by descending frequency.
  pub fn from_words<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      words: words.into_iter().map(Into::into).collect(),
    }
  }

  /// Parses list contents (see module docs for the format).
  pub fn parse(contents: &str) -> Self {
    Self::from_words(contents.lines().filter_map(|line| line.split_whitespace().next()))
  }

  /// The list compiled into the crate for `language`.
  pub fn bundled(language: Language) -> Self {
    match language {
      Language::En => Self::parse(BUNDLED_EN),
      Language::Es => Self::parse(BUNDLED_ES),
    }
  }

  /// Loads a list file.
  ///
  /// # Errors
  /// - The file cannot be read
  /// - The file holds no words
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WordListError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| WordListError::Io {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let list = Self::parse(&contents);
    if list.is_empty() {
      return Err(WordListError::Empty {
        path: path.to_path_buf(),
      });
    }
    Ok(list)
  }

  /// Number of words in the list
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// Whether the list holds no words
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// The `n` most frequent words
  pub fn top_n(&self, n: usize) -> &[String] {
    &self.words[..n.min(self.words.len())]
  }

  /// Rare tail of the `pool_size` most frequent words.
  ///
  /// Keeps purely alphabetic words of at least three characters, reverses them
  /// so the least frequent comes first, and keeps the first `rare_list_size`.
  pub fn rare_pool(&self, pool_size: usize, rare_list_size: usize) -> Vec<&str> {
    let mut pool: Vec<&str> = self
      .top_n(pool_size)
      .iter()
      .map(String::as_str)
      .filter(|w| is_candidate(w))
      .collect();
    pool.reverse();
    pool.truncate(rare_list_size);
    pool
  }

  /// Picks one word uniformly from [`rare_pool`](Self::rare_pool).
  ///
  /// `None` when no word survives the filter.
  pub fn pick_random_word<R: Rng + ?Sized>(
    &self,
    pool_size: usize,
    rare_list_size: usize,
    rng: &mut R,
  ) -> Option<&str> {
    self.rare_pool(pool_size, rare_list_size).choose(rng).copied()
  }
}

fn is_candidate(word: &str) -> bool {
  word.chars().count() >= MIN_WORD_CHARS && word.chars().all(char::is_alphabetic)
}
