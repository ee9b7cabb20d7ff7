//! Response models

use serde::Serialize;

/// Acknowledgement returned to Telegram for every webhook call
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AckResponse {
  /// Always `true`
  pub ok: bool,
}

impl AckResponse {
  /// The only acknowledgement the bot sends.
  #[must_use]
  pub fn ok() -> Self {
    Self { ok: true }
  }
}
