//! File System Utilities
//!
//! Configuration and data directory management.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "examadmin", "exam-admin").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/exam-admin/` or `$XDG_CONFIG_HOME/exam-admin/`
/// - **macOS**: `~/Library/Application Support/com.examadmin.exam-admin/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\examadmin\exam-admin\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get the data directory for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/exam-admin/`
/// - **macOS**: `~/Library/Application Support/com.examadmin.exam-admin/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\examadmin\exam-admin\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
