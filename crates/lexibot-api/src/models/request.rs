//! Telegram update models
//!
//! Only the fields the bot reads are modelled; everything else in the update
//! is ignored by serde.

use serde::Deserialize;

/// Incoming Telegram update
#[derive(Debug, Default, Deserialize)]
pub struct TelegramUpdate {
  /// Update id
  #[serde(default)]
  pub update_id: Option<i64>,
  /// Private or group message
  #[serde(default)]
  pub message: Option<TelegramMessage>,
  /// Channel post
  #[serde(default)]
  pub channel_post: Option<TelegramMessage>,
}

/// Message or channel post
#[derive(Debug, Default, Deserialize)]
pub struct TelegramMessage {
  /// Chat the message belongs to
  #[serde(default)]
  pub chat: Option<TelegramChat>,
  /// Message text (absent for stickers, photos, ...)
  #[serde(default)]
  pub text: Option<String>,
}

/// Chat reference
#[derive(Debug, Default, Deserialize)]
pub struct TelegramChat {
  /// Chat id
  #[serde(default)]
  pub id: i64,
}

impl TelegramUpdate {
  /// Chat id and trimmed text of the message this update carries.
  ///
  /// `message` wins over `channel_post`. Returns `None` when the chat id is
  /// missing or zero, or when the text is missing or blank.
  #[must_use]
  pub fn chat_and_text(&self) -> Option<(i64, &str)> {
    let message = self.message.as_ref().or(self.channel_post.as_ref())?;
    let chat_id = message.chat.as_ref().map(|c| c.id).filter(|id| *id != 0)?;
    let text = message.text.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
    Some((chat_id, text))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(json: &str) -> TelegramUpdate {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn message_text_is_trimmed() {
    let update = parse(r#"{"update_id": 1, "message": {"chat": {"id": 42}, "text": "  /dict hi  "}}"#);
    assert_eq!(update.chat_and_text(), Some((42, "/dict hi")));
  }

  #[test]
  fn channel_post_is_accepted() {
    let update = parse(r#"{"channel_post": {"chat": {"id": -100}, "text": "/dict"}}"#);
    assert_eq!(update.chat_and_text(), Some((-100, "/dict")));
  }

  #[test]
  fn message_takes_precedence_over_channel_post() {
    let update = parse(
      r#"{"message": {"chat": {"id": 1}, "text": "a"}, "channel_post": {"chat": {"id": 2}, "text": "b"}}"#,
    );
    assert_eq!(update.chat_and_text(), Some((1, "a")));
  }

  #[test]
  fn updates_without_usable_text_are_ignored() {
    for json in [
      r#"{}"#,
      r#"{"message": {"chat": {"id": 42}}}"#,
      r#"{"message": {"chat": {"id": 42}, "text": "   "}}"#,
      r#"{"message": {"text": "/dict hi"}}"#,
      r#"{"message": {"chat": {"id": 0}, "text": "/dict hi"}}"#,
      r#"{"edited_message": {"chat": {"id": 42}, "text": "/dict hi"}}"#,
    ] {
      assert_eq!(parse(json).chat_and_text(), None, "{json}");
    }
  }
}
