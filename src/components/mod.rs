//! Components - Reusable UI Components
//!
//! Widgets, the data table, and the workspace chrome.

pub mod composite;
pub mod layout;
pub mod primitives;
