//! Exam Admin - Main Entry Point

use anyhow::Context;
use exam_admin::app::application::run_app;
use exam_admin::app::navigation::RoleLayout;
use exam_admin::utils::{config_store, logging};

fn main() -> anyhow::Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init_logging().context("failed to initialize logging")?;

    let config = match config_store::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Using default configuration");
            Default::default()
        }
    };

    tracing::info!(
        role = ?config.role,
        locale = config.locale(),
        page_size = config.page_size,
        "Starting Exam Admin..."
    );

    let layout = RoleLayout::for_role(config.role);
    run_app(config, layout);

    Ok(())
}
