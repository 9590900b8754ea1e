//! ConfigState - Application Configuration State

use crate::domain::config::AppConfig;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
}

impl ConfigState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Remember the chosen UI language
    pub fn set_locale(&mut self, code: &str) {
        self.config.locale = Some(code.to_string());
    }
}
