//! Splitting long replies into Telegram-sized messages

use tracing::warn;

use super::telegram::Messenger;
use crate::errors::MessagingError;

/// Maximum length (in characters) of one Telegram message.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Splits `text` into consecutive chunks of at most `limit` characters.
///
/// Splitting is on character boundaries, never inside a UTF-8 sequence.
/// An empty text yields no chunks.
pub fn split_chunks(text: &str, limit: usize) -> Vec<&str> {
  let limit = limit.max(1);
  let mut chunks = Vec::new();
  let mut rest = text;
  while !rest.is_empty() {
    let end = rest.char_indices().nth(limit).map_or(rest.len(), |(idx, _)| idx);
    let (chunk, tail) = rest.split_at(end);
    chunks.push(chunk);
    rest = tail;
  }
  chunks
}

/// Sends `text` to `chat_id` in order, one message per chunk.
///
/// Stops at the first delivery error.
///
/// # Returns
/// Number of messages sent
pub async fn send_chunks(
  messenger: &dyn Messenger,
  chat_id: i64,
  text: &str,
) -> Result<usize, MessagingError> {
  let chunks = split_chunks(text, TELEGRAM_MESSAGE_LIMIT);
  for (i, chunk) in chunks.iter().enumerate() {
    if let Err(e) = messenger.send_text(chat_id, chunk).await {
      warn!(chat_id, chunk = i, error = %e, "message delivery failed");
      return Err(e);
    }
  }
  Ok(chunks.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nine_thousand_chars_make_three_chunks() {
    let text = "a".repeat(9000);
    let sizes: Vec<usize> = split_chunks(&text, TELEGRAM_MESSAGE_LIMIT).iter().map(|c| c.len()).collect();
    assert_eq!(sizes, vec![4096, 4096, 808]);
  }

  #[test]
  fn short_text_is_one_chunk() {
    assert_eq!(split_chunks("hello", TELEGRAM_MESSAGE_LIMIT), vec!["hello"]);
  }

  #[test]
  fn exact_limit_is_one_chunk() {
    let text = "x".repeat(TELEGRAM_MESSAGE_LIMIT);
    assert_eq!(split_chunks(&text, TELEGRAM_MESSAGE_LIMIT).len(), 1);
  }

  #[test]
  fn empty_text_has_no_chunks() {
    assert!(split_chunks("", TELEGRAM_MESSAGE_LIMIT).is_empty());
  }

  #[test]
  fn multibyte_characters_are_counted_as_characters() {
    let text = "ñ".repeat(5);
    let chunks = split_chunks(&text, 2);
    assert_eq!(chunks, vec!["ññ", "ññ", "ñ"]);
  }

  #[test]
  fn chunks_reassemble_to_the_original() {
    let text = "Definition → ejemplo • ".repeat(400);
    let chunks = split_chunks(&text, 1000);
    assert!(chunks.iter().all(|c| c.chars().count() <= 1000));
    assert_eq!(chunks.concat(), text);
  }
}
