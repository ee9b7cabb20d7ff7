//! Inline markup cleaner for Merriam-Webster text fields

use std::sync::OnceLock;

use regex::Regex;

static A_LINK_PATTERN: OnceLock<Regex> = OnceLock::new();
static SX_PATTERN: OnceLock<Regex> = OnceLock::new();
static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_PATTERN: OnceLock<Regex> = OnceLock::new();
static SPACE_BEFORE_PUNCT_PATTERN: OnceLock<Regex> = OnceLock::new();

/// `{a_link|word}`
fn a_link_regex() -> &'static Regex {
  A_LINK_PATTERN
    .get_or_init(|| Regex::new(r"\{a_link\|([^}|]+)\}").expect("Invalid a_link regex pattern"))
}

/// `{sx|word|sense|number}`
fn sx_regex() -> &'static Regex {
  SX_PATTERN
    .get_or_init(|| Regex::new(r"\{sx\|([^}|]+)\|[^}]*\}").expect("Invalid sx regex pattern"))
}

fn tag_regex() -> &'static Regex {
  TAG_PATTERN.get_or_init(|| Regex::new(r"\{.*?\}").expect("Invalid tag regex pattern"))
}

fn whitespace_regex() -> &'static Regex {
  WHITESPACE_PATTERN.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"))
}

fn space_before_punct_regex() -> &'static Regex {
  SPACE_BEFORE_PUNCT_PATTERN
    .get_or_init(|| Regex::new(r"\s+([,;:.])").expect("Invalid punctuation regex pattern"))
}

/// Turns Merriam-Webster marked-up text into plain prose.
///
/// - `{bc}` becomes `": "`
/// - `{it}`/`{wi}` wrappers are dropped, their content kept
/// - `{a_link|word}` and `{sx|word||}` become `word`
/// - every other `{...}` tag (and any unmatched brace) is removed
/// - whitespace is collapsed and never left in front of `, ; : .`
///
/// The result never contains `{` or `}`, so cleaning twice is the same as cleaning once.
pub fn clean_text(raw: &str) -> String {
  let s = raw
    .replace("{bc}", ": ")
    .replace("{wi}", "")
    .replace("{/wi}", "")
    .replace("{it}", "")
    .replace("{/it}", "");

  let s = a_link_regex().replace_all(&s, "$1");
  let s = sx_regex().replace_all(&s, "$1");
  let s = tag_regex().replace_all(&s, "");
  let s = s.replace(['{', '}'], "");

  let s = whitespace_regex().replace_all(&s, " ");
  space_before_punct_regex().replace_all(s.trim(), "$1").into_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bold_colon_becomes_colon_space() {
    assert_eq!(clean_text("{bc}feeling pleasure"), ": feeling pleasure");
  }

  #[test]
  fn italic_and_word_wrappers_keep_content() {
    assert_eq!(
      clean_text("a {it}happy{/it} {wi}ending{/wi}"),
      "a happy ending"
    );
  }

  #[test]
  fn links_keep_their_word() {
    assert_eq!(
      clean_text("{bc}notably {a_link|fortunate} or {sx|lucky||}"),
      ": notably fortunate or lucky"
    );
    assert_eq!(clean_text("{sx|glad|1|a} times"), "glad times");
  }

  #[test]
  fn unknown_tags_are_removed() {
    assert_eq!(
      clean_text("{dx}see also {dxt|joy||}{/dx} words"),
      "see also words"
    );
    assert_eq!(clean_text("{gloss}male{/gloss} cat"), "male cat");
  }

  #[test]
  fn whitespace_collapses_and_hugs_punctuation() {
    assert_eq!(
      clean_text("  one   two ,three ;  four : five .  "),
      "one two,three; four: five."
    );
  }

  #[test]
  fn output_never_contains_braces() {
    let inputs = [
      "plain text",
      "{bc}a {it}b{/it}",
      "{unclosed tag",
      "closing only}",
      "{a{b}c}",
      "{{bc}}",
      "{sx|x|}{a_link|y}",
    ];
    for input in inputs {
      let cleaned = clean_text(input);
      assert!(
        !cleaned.contains('{') && !cleaned.contains('}'),
        "braces left in {cleaned:?} (input {input:?})"
      );
    }
  }

  #[test]
  fn cleaning_is_idempotent() {
    let inputs = [
      "",
      "   ",
      "{bc}notably {a_link|fortunate} or {sx|lucky||} , indeed .",
      "word {it}x{/it}: {gl}masculine{/gl} ; more",
      "{unclosed and , spaced ;",
      "a\t\n b . , c",
      "{bc}{bc} :",
    ];
    for input in inputs {
      let once = clean_text(input);
      assert_eq!(clean_text(&once), once, "not idempotent for {input:?}");
    }
  }
}
