//! Merriam-Webster entry formatter (Collegiate and Spanish-English)

use serde_json::Value;

use super::senses::extract_definitions;
use crate::config::Language;

/// Returned when the payload is not a non-empty list.
pub const NO_DATA_MESSAGE: &str = "No data returned.";

/// Placeholder for missing scalar fields.
const PLACEHOLDER: &str = "-";

/// At most this many stems are listed.
const MAX_STEMS: usize = 10;

const AUDIO_BASE_URL: &str = "https://media.merriam-webster.com/audio/prons/en/us/mp3";

/// Builds the pronunciation audio URL for a Merriam-Webster audio code.
///
/// The subdirectory is `bix` for codes starting with `bix`, `gg` for codes
/// starting with `gg`, `number` when the code does not start with a letter,
/// and the first character otherwise.
pub fn audio_url(audio: &str) -> String {
  let subdir = if audio.starts_with("bix") {
    "bix".to_string()
  } else if audio.starts_with("gg") {
    "gg".to_string()
  } else {
    match audio.chars().next() {
      Some(first) if first.is_alphabetic() => first.to_string(),
      _ => "number".to_string(),
    }
  };
  format!("{AUDIO_BASE_URL}/{subdir}/{audio}.mp3")
}

/// Formats a raw Merriam-Webster response as plain text.
///
/// - not a non-empty list → [`NO_DATA_MESSAGE`]
/// - a list of strings (no exact match) → the suggestions
/// - otherwise only the first entry is rendered
///
/// Gender labels are included for [`Language::Es`].
pub fn format_entries(data: &Value, language: Language) -> String {
  let Some(items) = data.as_array().filter(|items| !items.is_empty()) else {
    return NO_DATA_MESSAGE.to_string();
  };

  if items[0].is_string() {
    let suggestions: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
    return format!("No exact entry. Did you mean: {}?", suggestions.join(", "));
  }

  // First entry wins
  render_entry(&items[0], language)
}

/// Fields of one entry, already defaulted
struct EntryView<'a> {
  id: &'a str,
  headword: &'a str,
  pronunciation: Option<&'a str>,
  audio: Option<String>,
  part_of_speech: &'a str,
  offensive: bool,
  stems: Vec<&'a str>,
  variants: Vec<String>,
  definitions: Vec<String>,
}

impl<'a> EntryView<'a> {
  fn from_value(entry: &'a Value, language: Language) -> Self {
    let meta = entry.get("meta");
    let hwi = entry.get("hwi");

    let headword = hwi.and_then(|h| h.get("hw")).and_then(Value::as_str).unwrap_or(PLACEHOLDER);
    let id = meta.and_then(|m| m.get("id")).and_then(Value::as_str).unwrap_or(headword);

    let first_pron = hwi
      .and_then(|h| h.get("prs"))
      .and_then(Value::as_array)
      .and_then(|prs| prs.first())
      .filter(|p| p.is_object());
    let pronunciation = first_pron
      .and_then(|p| p.get("mw"))
      .and_then(Value::as_str)
      .filter(|mw| !mw.is_empty());
    let audio = first_pron
      .and_then(|p| p.get("sound"))
      .and_then(|s| s.get("audio"))
      .and_then(Value::as_str)
      .filter(|code| !code.is_empty())
      .map(audio_url);

    let part_of_speech = entry.get("fl").and_then(Value::as_str).unwrap_or(PLACEHOLDER);
    let offensive = meta.and_then(|m| m.get("offensive")).and_then(Value::as_bool).unwrap_or(false);

    let stems: Vec<&str> = meta
      .and_then(|m| m.get("stems"))
      .and_then(Value::as_array)
      .map(|stems| stems.iter().filter_map(Value::as_str).take(MAX_STEMS).collect())
      .unwrap_or_default();

    Self {
      id,
      headword,
      pronunciation,
      audio,
      part_of_speech,
      offensive,
      stems,
      variants: variants(entry),
      definitions: definitions(entry, language),
    }
  }

  fn render(&self) -> String {
    let mut lines = vec![
      format!("Word: {}", self.id),
      format!("Headword: {}", self.headword),
    ];
    if let Some(pronunciation) = self.pronunciation {
      lines.push(format!("Pronunciation: {pronunciation}"));
    }
    if let Some(audio) = &self.audio {
      lines.push(format!("Audio: {audio}"));
    }
    lines.push(format!("Part of speech: {}", self.part_of_speech));
    lines.push(format!("Offensive: {}", if self.offensive { "True" } else { "False" }));

    for (i, stem) in self.stems.iter().enumerate() {
      lines.push(format!("Stem {}: {stem}", i + 1));
    }

    if !self.variants.is_empty() {
      lines.push("Variants:".to_string());
      lines.extend(self.variants.iter().map(|v| format!("  • {v}")));
    }

    if self.definitions.is_empty() {
      lines.push("No definitions found.".to_string());
    } else {
      lines.push("{".to_string());
      for (i, definition) in self.definitions.iter().enumerate() {
        lines.push(format!("    Definition {} {definition}", i + 1));
      }
      lines.push("}".to_string());
    }

    lines.join("\n")
  }
}

fn render_entry(entry: &Value, language: Language) -> String {
  EntryView::from_value(entry, language).render()
}

/// Undefined run-ons (`uros`): `ure` with an optional `(fl)`
fn variants(entry: &Value) -> Vec<String> {
  let Some(uros) = entry.get("uros").and_then(Value::as_array) else {
    return Vec::new();
  };
  uros
    .iter()
    .filter_map(|uro| {
      let ure = uro.get("ure").and_then(Value::as_str).filter(|u| !u.is_empty())?;
      Some(match uro.get("fl").and_then(Value::as_str).filter(|f| !f.is_empty()) {
        Some(fl) => format!("{ure} ({fl})"),
        None => ure.to_string(),
      })
    })
    .collect()
}

/// Rich definitions from `def[0].sseq`, falling back to `shortdef`
fn definitions(entry: &Value, language: Language) -> Vec<String> {
  let rich = entry
    .get("def")
    .and_then(Value::as_array)
    .and_then(|defs| defs.first())
    .and_then(|def| def.get("sseq"))
    .map(|sseq| extract_definitions(sseq, language == Language::Es))
    .unwrap_or_default();
  if !rich.is_empty() {
    return rich;
  }

  entry
    .get("shortdef")
    .and_then(Value::as_array)
    .map(|defs| defs.iter().filter_map(Value::as_str).map(str::to_string).collect())
    .unwrap_or_default()
}
