//! client module
pub mod dictionary_client;

/// Re-exports
pub use dictionary_client::{DictionaryClient, HttpDictionaryClient};
