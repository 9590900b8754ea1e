//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency so views only re-render for what they observe.

use gpui::{App, AppContext, Entity, Global};

use crate::app::navigation::RoleLayout;
use crate::domain::config::AppConfig;
use crate::i18n::Locale;
use crate::state::{
    config_state::ConfigState, i18n_state::I18nState, navigation_state::NavigationState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Sidebar navigation within the role layout
    pub navigation: Entity<NavigationState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, layout: RoleLayout, cx: &mut App) -> Self {
        let locale = Locale::from_code(config.locale());
        Self {
            config: cx.new(|_| ConfigState::new(config)),
            navigation: cx.new(|_| NavigationState::new(layout)),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
