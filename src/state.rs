//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::system::SystemInfo;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the read-only system-info
/// provider that handlers consult at request time. There is no mutable state:
/// every request is independent.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub system: Arc<dyn SystemInfo>,
}

impl AppState {
    /// Creates a new application state from the given configuration and provider.
    pub fn new(config: AppConfig, system: Arc<dyn SystemInfo>) -> Self {
        Self {
            config: Arc::new(config),
            system,
        }
    }
}
