//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{MAX_UPDATE_BYTES, health_check, post_telegram_webhook, root_ack};
pub use routes::{create_router, run_server};
pub use state::AppState;
