//! lexibot dictionary bot library
//!
//! Fetches entries from dictionaryapi.dev and Merriam-Webster, renders them as
//! plain text for chat, and builds the daily rare-word digest.

/// Client module - DictionaryClient trait and its reqwest implementation
pub mod client;

/// Command module - `/dict` command parsing and fixed replies
pub mod commands;

/// Config module - Language, DictionarySource, client and digest settings
pub mod config;

/// Digest module - daily rare-word picking and message layout
pub mod digest;

/// Error module - one error type per concern
pub mod errors;

/// Formatter module - markup cleaning, sense extraction and entry rendering
pub mod formatter;

/// Messaging module - Messenger trait, Telegram client and chunked sending
pub mod messaging;

/// Service module - LexiconService, command to reply text
pub mod service;

/// Word list module - frequency lists and the rare-word picker
pub mod wordlist;

/// Re-exports
pub use client::{DictionaryClient, HttpDictionaryClient};
pub use commands::Command;
pub use config::{DictionaryConfig, DictionarySource, DigestSettings, Language};
pub use messaging::{Messenger, TelegramMessenger};
pub use service::LexiconService;
pub use wordlist::FrequencyList;
