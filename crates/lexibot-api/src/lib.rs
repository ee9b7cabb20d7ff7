//! lexibot-api crate
//!
//! Telegram webhook server for the lexibot dictionary bot, plus the
//! `daily-word` job binary.
//!
//! ## Endpoints
//! - `GET /` - Liveness acknowledgement (`{"ok": true}`)
//! - `GET /health` - Health Check
//! - `POST /telegram/{secret}` - Telegram webhook
//!
//! ## Registering the webhook
//! ```bash
//! curl "https://api.telegram.org/bot$TELEGRAM_BOT_TOKEN/setWebhook" \
//!   -d "url=https://bot.example.com/telegram/$WEBHOOK_SECRET"
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::ApiError;
pub use models::{AckResponse, TelegramUpdate};
pub use service::WebhookService;
