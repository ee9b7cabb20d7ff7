//! `/dict` chat command parsing

use crate::config::DictionarySource;

/// Literal prefix recognized as a dictionary command.
pub const DICT_PREFIX: &str = "/dict";

/// Reply to a bare `/dict`.
pub const USAGE_MESSAGE: &str = "Usage:\n/dict <word>\n/dict mw <word>\n/dict es <palabra>";

/// Reply to any text that is not a `/dict` command.
pub const HELP_MESSAGE: &str = "Commands:\n/dict <word>\n/dict mw <word>\n/dict es <palabra>";

/// A parsed chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// `/dict` without arguments
  Usage,
  /// `/dict mw` or `/dict es` without a word
  SubcommandUsage(DictionarySource),
  /// A dictionary lookup
  Lookup {
    /// Dictionary to query
    source: DictionarySource,
    /// Word or phrase, tokens joined by single spaces
    word: String,
  },
  /// Anything else
  Help,
}

impl Command {
  /// Parses a (trimmed) chat message.
  ///
  /// ```text
  /// /dict hello     → free dictionary
  /// /dict mw hello  → Merriam-Webster English
  /// /dict es hola   → Merriam-Webster Spanish-English
  /// ```
  pub fn parse(text: &str) -> Self {
    if !text.starts_with(DICT_PREFIX) {
      return Command::Help;
    }

    let parts: Vec<&str> = text.split_whitespace().collect();
    let Some(sub) = parts.get(1) else {
      return Command::Usage;
    };

    let subcommand = match sub.to_lowercase().as_str() {
      "mw" => Some(DictionarySource::MerriamWebsterEnglish),
      "es" => Some(DictionarySource::MerriamWebsterSpanish),
      _ => None,
    };

    match subcommand {
      Some(source) if parts.len() < 3 => Command::SubcommandUsage(source),
      Some(source) => Command::Lookup {
        source,
        word: parts[2..].join(" "),
      },
      None => Command::Lookup {
        source: DictionarySource::FreeDictionary,
        word: parts[1..].join(" "),
      },
    }
  }

  /// Fixed reply for commands that need no lookup.
  pub fn static_reply(&self) -> Option<&'static str> {
    match self {
      Command::Usage => Some(USAGE_MESSAGE),
      Command::SubcommandUsage(DictionarySource::MerriamWebsterSpanish) => {
        Some("Usage: /dict es <palabra>")
      }
      Command::SubcommandUsage(_) => Some("Usage: /dict mw <word>"),
      Command::Help => Some(HELP_MESSAGE),
      Command::Lookup { .. } => None,
    }
  }
}
