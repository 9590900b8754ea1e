//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and local widgets.

pub mod dashboard;
pub mod records;
