//! Application state shared across handlers.

use roost_core::config::AppConfig;
use roost_gallery::Gallery;
use std::sync::Arc;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gallery: Arc<Gallery>,
}

impl AppState {
    pub fn new(config: AppConfig, gallery: Gallery) -> Self {
        Self {
            config: Arc::new(config),
            gallery: Arc::new(gallery),
        }
    }
}
