//! messaging module
mod chunk;
pub mod telegram;

/// Re-exports
pub use chunk::{TELEGRAM_MESSAGE_LIMIT, send_chunks, split_chunks};
pub use telegram::{Messenger, TELEGRAM_API_BASE, TelegramMessenger};
