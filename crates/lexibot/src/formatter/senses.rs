//! Definition extraction from Merriam-Webster `def[].sseq` blocks
//!
//! `sseq` is a list of sense groups. Each group is a list of tagged pairs
//! `["sense", {...}]`, and each sense carries a `dt` list of tagged pairs:
//!
//! ```text
//! ["text", "{bc}the feeling of ..."]
//! ["gl", "masculine"]                         (Spanish only)
//! ["vis", [{"t": "example", "tr": "ejemplo"}]]
//! ```

use std::collections::HashSet;

use serde_json::Value;

use super::cleaner::clean_text;

/// Collects one readable line per sense, deduplicated in first-seen order.
///
/// Gender labels (`gl`) are only kept when `include_gender` is set.
/// Malformed pieces are skipped; anything that is not a list yields no lines.
pub fn extract_definitions(sseq: &Value, include_gender: bool) -> Vec<String> {
  let Some(groups) = sseq.as_array() else {
    return Vec::new();
  };

  let mut lines = Vec::new();
  for group in groups.iter().filter_map(Value::as_array) {
    for sense in group.iter().filter_map(tagged_sense) {
      if let Some(line) = sense_line(sense, include_gender) {
        lines.push(line);
      }

      // sdsense ("also", "compare") sometimes holds extra texts
      if let Some(sd_dt) = sense.get("sdsense").and_then(|sd| sd.get("dt")) {
        lines.extend(tagged_texts(sd_dt).map(clean_text));
      }
    }
  }

  dedup_preserving_order(lines)
}

/// `["sense", {...}]` → the sense object
fn tagged_sense(item: &Value) -> Option<&Value> {
  match item.as_array()?.as_slice() {
    [tag, sense] if tag.as_str() == Some("sense") && sense.is_object() => Some(sense),
    _ => None,
  }
}

/// Merges the `dt` pieces of one sense into a single line.
fn sense_line(sense: &Value, include_gender: bool) -> Option<String> {
  let mut texts: Vec<String> = Vec::new();
  let mut genders: Vec<&str> = Vec::new();
  let mut examples: Vec<String> = Vec::new();

  let pieces = sense.get("dt").and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default();
  for piece in pieces.iter().filter_map(Value::as_array) {
    let Some(tag) = piece.first().and_then(Value::as_str) else {
      continue;
    };
    let body = piece.get(1);

    match tag {
      "text" => {
        if let Some(text) = body.and_then(Value::as_str) {
          texts.push(clean_text(text));
        }
      }
      "gl" if include_gender => {
        if let Some(label) = body.and_then(Value::as_str) {
          genders.push(label);
        }
      }
      "vis" => {
        let visuals = body.and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default();
        examples.extend(visuals.iter().filter_map(example_line));
      }
      _ => {}
    }
  }

  let mut parts: Vec<String> = Vec::new();
  if !texts.is_empty() {
    parts.push(texts.join(" "));
  }
  if !genders.is_empty() {
    parts.push(format!("({})", genders.join("; ")));
  }
  parts.extend(examples);

  let line = parts.iter().filter(|p| !p.is_empty()).map(String::as_str).collect::<Vec<_>>().join(" ");
  let line = line.trim();
  (!line.is_empty()).then(|| line.to_string())
}

/// `{"t": ..., "tr": ...}` → `e.g. t → tr`
fn example_line(example: &Value) -> Option<String> {
  let text = example.get("t").and_then(Value::as_str)?;
  match example.get("tr").and_then(Value::as_str) {
    Some(translation) => Some(format!(
      "e.g. {} → {}",
      clean_text(text),
      clean_text(translation)
    )),
    None => Some(format!("e.g. {}", clean_text(text))),
  }
}

/// String bodies of the `["text", "..."]` pieces of a `dt` list
fn tagged_texts(dt: &Value) -> impl Iterator<Item = &str> {
  dt.as_array()
    .into_iter()
    .flatten()
    .filter_map(Value::as_array)
    .filter(|piece| piece.first().and_then(Value::as_str) == Some("text"))
    .filter_map(|piece| piece.get(1).and_then(Value::as_str))
}

fn dedup_preserving_order(lines: Vec<String>) -> Vec<String> {
  let mut seen = HashSet::new();
  lines
    .into_iter()
    .filter(|line| !line.is_empty() && seen.insert(line.clone()))
    .collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn sense(dt: Value) -> Value {
    json!(["sense", { "dt": dt }])
  }

  #[test]
  fn non_list_input_yields_nothing() {
    assert!(extract_definitions(&Value::Null, true).is_empty());
    assert!(extract_definitions(&json!({"sense": 1}), true).is_empty());
    assert!(extract_definitions(&json!([]), true).is_empty());
  }

  #[test]
  fn text_pieces_are_cleaned_and_joined() {
    let sseq = json!([[sense(json!([
      ["text", "{bc}notably {a_link|fortunate}"],
      ["text", "or {it}lucky{/it}"]
    ]))]]);
    assert_eq!(
      extract_definitions(&sseq, false),
      vec![": notably fortunate or lucky"]
    );
  }

  #[test]
  fn gender_labels_only_when_enabled() {
    let sseq = json!([[sense(json!([
      ["text", "{bc}cat"],
      ["gl", "masculine"],
      ["gl", "feminine"]
    ]))]]);
    assert_eq!(
      extract_definitions(&sseq, true),
      vec![": cat (masculine; feminine)"]
    );
    assert_eq!(extract_definitions(&sseq, false), vec![": cat"]);
  }

  #[test]
  fn examples_with_and_without_translation() {
    let sseq = json!([[sense(json!([
      ["text", "{bc}house"],
      ["vis", [
        {"t": "una {it}casa{/it} grande", "tr": "a big house"},
        {"t": "mi casa"},
        {"tr": "orphan translation"},
        "not an object"
      ]]
    ]))]]);
    assert_eq!(
      extract_definitions(&sseq, true),
      vec![": house e.g. una casa grande → a big house e.g. mi casa"]
    );
  }

  #[test]
  fn sdsense_texts_become_extra_lines() {
    let sseq = json!([[
      ["sense", {
        "dt": [["text", "{bc}glad"]],
        "sdsense": {"sd": "also", "dt": [["text", "{bc}pleased"], ["vis", []]]}
      }]
    ]]);
    assert_eq!(extract_definitions(&sseq, false), vec![": glad", ": pleased"]);
  }

  #[test]
  fn duplicates_are_removed_in_first_seen_order() {
    let sseq = json!([
      [sense(json!([["text", "{bc}b"]])), sense(json!([["text", "{bc}a"]]))],
      [sense(json!([["text", "{bc}b"]])), sense(json!([["text", "{bc}c"]]))],
      [sense(json!([["text", "{bc}a"]]))]
    ]);
    assert_eq!(extract_definitions(&sseq, false), vec![": b", ": a", ": c"]);
  }

  #[test]
  fn malformed_items_are_skipped() {
    let sseq = json!([
      "not a group",
      [
        ["pseq", {"dt": [["text", "ignored"]]}],
        ["sense"],
        ["sense", "not an object"],
        ["sense", {"dt": "not a list"}],
        ["sense", {"dt": [[], [1, 2], ["text"], ["text", 5]]}],
        sense(json!([["text", "{bc}kept"]]))
      ]
    ]);
    assert_eq!(extract_definitions(&sseq, true), vec![": kept"]);
  }

  #[test]
  fn senses_without_content_are_dropped() {
    let sseq = json!([[sense(json!([["text", "{dx}{/dx}"], ["gl", "masculine"]]))]]);
    assert!(extract_definitions(&sseq, false).is_empty());
  }
}
