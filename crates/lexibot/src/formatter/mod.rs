//! formatter module
//!
//! Pure JSON-to-text transformations. Nothing here performs IO or raises on
//! unexpected shapes: missing fields become placeholders or are omitted.

mod cleaner;
mod entry;
mod legacy;
mod senses;

/// Re-exports
pub use cleaner::clean_text;
pub use entry::{NO_DATA_MESSAGE, audio_url, format_entries};
pub use legacy::format_free_dictionary;
pub use senses::extract_definitions;
