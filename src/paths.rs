//! Centralized path resolution for the trade journal
//!
//! All file and directory paths are resolved through this module so the
//! binary behaves the same regardless of the working directory it runs from.
//!
//! ## Directory Structure
//!
//! ```text
//! <data_local_dir>/TradeJournal/
//! ├── data/
//! │ ├── config.toml
//! │ └── journal.db
//! └── logs/
//!   └── journal_YYYY-MM-DD.log
//! ```

use once_cell::sync::Lazy;
use std::path::PathBuf;

// =============================================================================
// BASE DIRECTORY RESOLUTION
// =============================================================================

/// Lazy-initialized base directory (thread-safe)
static BASE_DIRECTORY: Lazy<PathBuf> = Lazy::new(resolve_base_directory);

/// Resolves the base directory for all journal data
///
/// Uses platform-specific application data locations:
/// - macOS: ~/Library/Application Support/TradeJournal
/// - Windows: %LOCALAPPDATA%\TradeJournal
/// - Linux: $XDG_DATA_HOME/TradeJournal (fallback ~/.local/share/TradeJournal)
fn resolve_base_directory() -> PathBuf {
    const APP_DIR: &str = "TradeJournal";

    if let Some(dir) = dirs::data_local_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(APP_DIR);
    }

    PathBuf::from(APP_DIR)
}

// =============================================================================
// PRIMARY DIRECTORY ACCESSORS
// =============================================================================

/// Returns the base directory for all journal data
pub fn get_base_directory() -> PathBuf {
    BASE_DIRECTORY.clone()
}

/// Returns the data directory path (config file and database)
pub fn get_data_directory() -> PathBuf {
    BASE_DIRECTORY.join("data")
}

/// Returns the logs directory path
pub fn get_logs_directory() -> PathBuf {
    BASE_DIRECTORY.join("logs")
}

// =============================================================================
// FILE PATHS
// =============================================================================

/// Returns the main configuration file path
pub fn get_config_path() -> PathBuf {
    get_data_directory().join("config.toml")
}

/// Returns the journal database path
pub fn get_journal_db_path() -> PathBuf {
    get_data_directory().join("journal.db")
}

// =============================================================================
// DIRECTORY CREATION
// =============================================================================

/// Ensures all required directories exist
///
/// Must run before the logger is initialized, since file logging writes
/// into the logs directory.
pub fn ensure_all_directories() -> Result<(), String> {
    let dirs_to_create = [
        ("base", get_base_directory()),
        ("data", get_data_directory()),
        ("logs", get_logs_directory()),
    ];

    for (name, dir) in dirs_to_create.iter() {
        std::fs::create_dir_all(dir).map_err(|e| {
            format!(
                "Failed to create {} directory '{}': {}",
                name,
                dir.display(),
                e
            )
        })?;
    }

    Ok(())
}
