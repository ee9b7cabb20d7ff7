//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_HTTP_TIMEOUT_SECS, vars};
pub use env::Config;
