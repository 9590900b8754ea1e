//! Layout Components
//!
//! Header and sidebar of the workspace.

pub mod header;
pub mod sidebar;
