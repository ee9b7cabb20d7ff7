// crates/lexibot/src/config.rs

use std::time::Duration;

use crate::errors::ConfigError;

/// Default per-call timeout for outbound HTTP requests.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Number of most frequent words considered by the rare-word picker.
pub const DEFAULT_POOL_SIZE: usize = 200_000;

/// Size of the rare tail sampled by the rare-word picker.
pub const DEFAULT_RARE_LIST_SIZE: usize = 50_000;

/// Maximum number of words tried per language for the daily digest.
pub const DEFAULT_MAX_ATTEMPTS: usize = 12;

/// Supported dictionary languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
  /// English (Merriam-Webster Collegiate)
  En,
  /// Spanish (Merriam-Webster Spanish-English)
  Es,
}

impl Language {
  /// Returns the language code.
  ///
  /// # Examples
  /// - `Language::En` → `"en"`
  /// - `Language::Es` → `"es"`
  pub fn code(&self) -> &'static str {
    match self {
      Language::En => "en",
      Language::Es => "es",
    }
  }

  /// Merriam-Webster dictionary serving this language.
  pub fn merriam_webster_source(&self) -> DictionarySource {
    match self {
      Language::En => DictionarySource::MerriamWebsterEnglish,
      Language::Es => DictionarySource::MerriamWebsterSpanish,
    }
  }

  /// Label used in the daily digest ("English", "Spanish").
  pub fn display_name(&self) -> &'static str {
    match self {
      Language::En => "English",
      Language::Es => "Spanish",
    }
  }
}

impl std::fmt::Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

/// Third-party dictionaries the bot can query.
///
/// Each one answers with a differently shaped JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionarySource {
  /// dictionaryapi.dev (free, English only, no key)
  FreeDictionary,
  /// Merriam-Webster Collegiate Dictionary
  MerriamWebsterEnglish,
  /// Merriam-Webster Spanish-English Dictionary
  MerriamWebsterSpanish,
}

impl std::fmt::Display for DictionarySource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      DictionarySource::FreeDictionary => "free-dictionary",
      DictionarySource::MerriamWebsterEnglish => "merriam-webster-en",
      DictionarySource::MerriamWebsterSpanish => "merriam-webster-es",
    };
    f.write_str(name)
  }
}

/// Base URLs of the dictionary APIs. The looked-up word is appended as a path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEndpoints {
  /// dictionaryapi.dev v2 entries (English)
  pub free_dictionary: String,
  /// Merriam-Webster Collegiate JSON API
  pub merriam_webster_en: String,
  /// Merriam-Webster Spanish-English JSON API
  pub merriam_webster_es: String,
}

impl Default for DictionaryEndpoints {
  fn default() -> Self {
    Self {
      free_dictionary: "https://api.dictionaryapi.dev/api/v2/entries/en".to_string(),
      merriam_webster_en: "https://www.dictionaryapi.com/api/v3/references/collegiate/json"
        .to_string(),
      merriam_webster_es: "https://www.dictionaryapi.com/api/v3/references/spanish/json"
        .to_string(),
    }
  }
}

impl DictionaryEndpoints {
  /// Every endpoint rooted at `base` (used to point the client at a local server).
  pub fn rooted_at(base: &str) -> Self {
    let base = base.trim_end_matches('/');
    Self {
      free_dictionary: format!("{base}/free"),
      merriam_webster_en: format!("{base}/collegiate"),
      merriam_webster_es: format!("{base}/spanish"),
    }
  }

  /// Base URL for the given dictionary.
  pub fn base_for(&self, source: DictionarySource) -> &str {
    match source {
      DictionarySource::FreeDictionary => &self.free_dictionary,
      DictionarySource::MerriamWebsterEnglish => &self.merriam_webster_en,
      DictionarySource::MerriamWebsterSpanish => &self.merriam_webster_es,
    }
  }
}

/// Settings of the dictionary HTTP client.
#[derive(Clone)]
pub struct DictionaryConfig {
  /// Merriam-Webster Collegiate API key
  pub merriam_webster_en_key: String,
  /// Merriam-Webster Spanish-English API key
  pub merriam_webster_es_key: String,
  /// Per-call timeout
  pub timeout: Duration,
  /// API base URLs
  pub endpoints: DictionaryEndpoints,
}

impl std::fmt::Debug for DictionaryConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DictionaryConfig")
      .field("merriam_webster_en_key", &"***")
      .field("merriam_webster_es_key", &"***")
      .field("timeout", &self.timeout)
      .field("endpoints", &self.endpoints)
      .finish()
  }
}

impl DictionaryConfig {
  /// Creates a configuration with the default endpoints and timeout.
  pub fn new(merriam_webster_en_key: impl Into<String>, merriam_webster_es_key: impl Into<String>) -> Self {
    Self {
      merriam_webster_en_key: merriam_webster_en_key.into(),
      merriam_webster_es_key: merriam_webster_es_key.into(),
      timeout: DEFAULT_HTTP_TIMEOUT,
      endpoints: DictionaryEndpoints::default(),
    }
  }

  /// API key sent with requests to `source`, if that dictionary needs one.
  pub fn key_for(&self, source: DictionarySource) -> Option<&str> {
    match source {
      DictionarySource::FreeDictionary => None,
      DictionarySource::MerriamWebsterEnglish => Some(&self.merriam_webster_en_key),
      DictionarySource::MerriamWebsterSpanish => Some(&self.merriam_webster_es_key),
    }
  }

  /// Validates the configuration.
  ///
  /// # Errors
  /// `ConfigError::EmptyCredential` if a Merriam-Webster key is blank.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.merriam_webster_en_key.trim().is_empty() {
      return Err(ConfigError::EmptyCredential {
        name: "merriam_webster_en_key",
      });
    }
    if self.merriam_webster_es_key.trim().is_empty() {
      return Err(ConfigError::EmptyCredential {
        name: "merriam_webster_es_key",
      });
    }
    Ok(())
  }
}

/// Settings of the daily rare-word digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestSettings {
  /// Number of most frequent words taken from the list
  pub pool_size: usize,
  /// Size of the rare tail sampled from
  pub rare_list_size: usize,
  /// Words tried per language before giving up
  pub max_attempts: usize,
}

impl Default for DigestSettings {
  fn default() -> Self {
    Self {
      pool_size: DEFAULT_POOL_SIZE,
      rare_list_size: DEFAULT_RARE_LIST_SIZE,
      max_attempts: DEFAULT_MAX_ATTEMPTS,
    }
  }
}

impl DigestSettings {
  /// Validates the settings.
  ///
  /// # Validation Items
  /// - `pool_size` >= 1
  /// - `rare_list_size` >= 1
  /// - `max_attempts` >= 1
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.pool_size < 1 {
      return Err(ConfigError::InvalidPoolSize {
        actual: self.pool_size,
      });
    }
    if self.rare_list_size < 1 {
      return Err(ConfigError::InvalidRareListSize {
        actual: self.rare_list_size,
      });
    }
    if self.max_attempts < 1 {
      return Err(ConfigError::InvalidMaxAttempts {
        actual: self.max_attempts,
      });
    }
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
