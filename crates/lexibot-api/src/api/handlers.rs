//! HTTP handler definitions

use axum::{
  Json,
  body::Body,
  extract::{Path, State},
};
use tracing::{debug, warn};

use crate::models::{AckResponse, TelegramUpdate};

use super::state::AppState;

/// Largest webhook body read after the secret matched (bytes)
pub const MAX_UPDATE_BYTES: usize = 1024 * 1024;

/// GET / endpoint
pub async fn root_ack() -> Json<AckResponse> {
  Json(AckResponse::ok())
}

/// Health check endpoint
///
/// Confirms that the server is running.
pub async fn health_check() -> &'static str {
  "OK"
}

/// POST /telegram/{secret} endpoint
///
/// Always answers `{"ok": true}` so Telegram never retries an update.
///
/// - Wrong secret: the body is never read; nothing is parsed, fetched or sent
/// - Oversized or unparseable body, update without text: ignored
/// - Otherwise: the command reply is delivered in chunks before answering
pub async fn post_telegram_webhook(
  State(state): State<AppState>,
  Path(secret): Path<String>,
  body: Body,
) -> Json<AckResponse> {
  if secret != state.config.webhook_secret {
    debug!("webhook call with wrong secret ignored");
    return Json(AckResponse::ok());
  }

  let body = match axum::body::to_bytes(body, MAX_UPDATE_BYTES).await {
    Ok(bytes) => bytes,
    Err(e) => {
      warn!(error = %e, "webhook body could not be read");
      return Json(AckResponse::ok());
    }
  };

  let update: TelegramUpdate = match serde_json::from_slice(&body) {
    Ok(update) => update,
    Err(e) => {
      warn!(error = %e, body_len = body.len(), "webhook body is not a Telegram update");
      return Json(AckResponse::ok());
    }
  };

  state.service.handle_update(&update).await;
  Json(AckResponse::ok())
}
