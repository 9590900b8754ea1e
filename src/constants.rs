//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 180.0;

/// Header height in pixels
pub const HEADER_HEIGHT: f32 = 48.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Table layout
pub const TABLE_ROW_HEIGHT: f32 = 36.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;
pub const DEFAULT_COLUMN_WIDTH: f32 = 140.0;

/// Rows per page when the config does not say otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Delay between the last filter keystroke and the filter commit
pub const FILTER_DEBOUNCE_MS: u64 = 500;

/// Artificial latency applied by the in-memory record services
pub const SIMULATED_LATENCY_MS: u64 = 150;
