//! Models module

mod request;
mod response;

pub use request::{TelegramChat, TelegramMessage, TelegramUpdate};
pub use response::AckResponse;
