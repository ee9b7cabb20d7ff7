//! lexibot-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lexibot::{HttpDictionaryClient, LexiconService, TelegramMessenger};
use lexibot_api::ApiError;
use lexibot_api::api::{AppState, run_server};
use lexibot_api::config::Config;
use lexibot_api::service::WebhookService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env is optional
  let _ = dotenvy::dotenv();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env()?;
  tracing::info!(bind_addr = %config.bind_addr, "configuration loaded");

  let client = HttpDictionaryClient::new(config.dictionary_config())?;
  let messenger = TelegramMessenger::new(&config.telegram_bot_token, config.http_timeout)?;
  let service = WebhookService::new(
    LexiconService::new(Arc::new(client)),
    Arc::new(messenger),
  );
  tracing::info!("webhook service initialized");

  let state = AppState::new(config, service);

  run_server(state).await
}
