//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::time::Duration;

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::RoleLayout;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::i18n::t;
use crate::services::Catalog;

actions!(exam_admin, [Quit]);

/// Run the application for a loaded config and the role layout derived from it
pub fn run_app(config: AppConfig, layout: RoleLayout) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let catalog = Catalog::seeded(Duration::from_millis(config.simulated_latency_ms));

        // Initialize global entities
        let entities = AppEntities::init(config, layout, cx);
        cx.set_global(entities.clone());

        let locale = entities.i18n.read(cx).locale;

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), catalog.clone(), cx))
        }) {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
