//! Utilities - Config files, directories and logging

pub mod config_store;
pub mod fs;
pub mod logging;
