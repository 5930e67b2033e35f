use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::services::automation::AutomationService;
use crate::store::CourtStore;

pub mod actions;
pub mod courts;

pub struct AppState {
    pub store: CourtStore,
    pub automation: Arc<AutomationService>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: CourtStore::from_settings(&config.store),
            automation: Arc::new(AutomationService::new(&config.scripts)),
            config,
        }
    }
}
