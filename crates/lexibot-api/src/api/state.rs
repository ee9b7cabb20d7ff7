//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::WebhookService;

/// Application State
///
/// Shared across the whole server; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Arc<Config>,
  /// Update dispatcher
  ///
  /// - Production: real dictionary client and Telegram messenger
  /// - Test: recording stubs
  pub service: Arc<WebhookService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: WebhookService) -> Self {
    Self {
      config: Arc::new(config),
      service: Arc::new(service),
    }
  }
}
