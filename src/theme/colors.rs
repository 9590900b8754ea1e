//! Colors - Admin Console Palette

use gpui::{Rgba, rgb, rgba};

/// Admin color palette - All colors are accessed via associated functions
pub struct AdminColors;

impl AdminColors {
    // Primary colors
    /// Header background - Indigo
    pub fn header_bg() -> Rgba { rgb(0x3730a3) }
    /// Secondary accent - Blue
    pub fn accent_blue() -> Rgba { rgb(0x2563eb) }
    /// Active navigation item background
    pub fn nav_active_bg() -> Rgba { rgba(0x3730a31f) }
    /// Hovered navigation item background
    pub fn nav_hover_bg() -> Rgba { rgba(0x3730a30f) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf4f5f7) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x16a34a) }
    pub fn warning() -> Rgba { rgb(0xd97706) }
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    pub fn info() -> Rgba { rgb(0x2563eb) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    pub fn border_focus() -> Rgba { rgb(0x2563eb) }

    // Button colors
    pub fn button_primary_bg() -> Rgba { rgb(0x4f46e5) }
    pub fn button_primary_hover() -> Rgba { rgb(0x4338ca) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xeef2ff) }
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
