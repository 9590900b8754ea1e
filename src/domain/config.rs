//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, FILTER_DEBOUNCE_MS, SIMULATED_LATENCY_MS};
use crate::domain::role::Role;

/// Main application configuration, persisted as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Role the shell is laid out for
    pub role: Role,
    /// UI language ("en" or "zh"); detected from the OS when unset
    pub locale: Option<String>,
    /// Rows per table page
    pub page_size: usize,
    /// Filter commit delay in milliseconds (0 commits on every keystroke)
    pub filter_debounce_ms: u64,
    /// Artificial latency of the record services in milliseconds
    pub simulated_latency_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            role: Role::default(),
            locale: None,
            page_size: DEFAULT_PAGE_SIZE,
            filter_debounce_ms: FILTER_DEBOUNCE_MS,
            simulated_latency_ms: SIMULATED_LATENCY_MS,
        }
    }
}

impl AppConfig {
    /// Clamp values the UI cannot work with
    pub fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.locale.as_ref().is_some_and(|l| l.trim().is_empty()) {
            self.locale = None;
        }
        self
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str("role = \"teacher\"").expect("parse config");
        assert_eq!(config.role, Role::Teacher);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.filter_debounce_ms, FILTER_DEBOUNCE_MS);
    }

    #[test]
    fn normalized_fixes_zero_page_size_and_blank_locale() {
        let config = AppConfig {
            page_size: 0,
            locale: Some("  ".to_string()),
            ..AppConfig::default()
        }
        .normalized();

        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.locale, None);
        assert_eq!(config.locale(), "en");
    }
}
