//! dictionaryapi.dev (v2) formatter
//!
//! Only the first entry and its first meaning block are rendered.

use serde_json::Value;

/// Placeholder for missing fields of the free dictionary payload.
const PLACEHOLDER: &str = "—";

/// Formats a dictionaryapi.dev response for `word`.
pub fn format_free_dictionary(data: &Value, word: &str) -> String {
  let Some(first) = data.as_array().and_then(|entries| entries.first()) else {
    return format!("No data returned for '{word}'.");
  };

  let headword = first.get("word").and_then(Value::as_str).unwrap_or(word);
  let phonetic = first.get("phonetic").and_then(Value::as_str).unwrap_or(PLACEHOLDER);

  let Some(meaning) = first.get("meanings").and_then(Value::as_array).and_then(|m| m.first()) else {
    return format!("No meanings found for '{headword}'.");
  };
  let part_of_speech = meaning.get("partOfSpeech").and_then(Value::as_str).unwrap_or(PLACEHOLDER);

  let definitions = meaning.get("definitions").and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default();
  if definitions.is_empty() {
    return format!("No definitions available for '{headword}'.");
  }

  let mut lines = vec![
    format!("Word: {headword}"),
    format!("Phonetic: {phonetic}"),
    format!("Part of speech: {part_of_speech}"),
    "{".to_string(),
  ];

  for (k, definition) in definitions.iter().enumerate() {
    if !definition.is_object() {
      continue;
    }
    let text = definition.get("definition").and_then(Value::as_str).unwrap_or(PLACEHOLDER);
    lines.push(format!("    Definition {}: {text}", k + 1));
    push_numbered(&mut lines, "        Synonym", definition.get("synonyms"));
    push_numbered(&mut lines, "        Antonym", definition.get("antonyms"));
  }

  lines.push("}".to_string());

  push_numbered(&mut lines, "Synonym", meaning.get("synonyms"));
  push_numbered(&mut lines, "Antonym", meaning.get("antonyms"));

  lines.join("\n")
}

/// `<label> i: <item>` for every string in `items`
fn push_numbered(lines: &mut Vec<String>, label: &str, items: Option<&Value>) {
  let items = items.and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default();
  for (i, item) in items.iter().filter_map(Value::as_str).enumerate() {
    lines.push(format!("{label} {}: {item}", i + 1));
  }
}
