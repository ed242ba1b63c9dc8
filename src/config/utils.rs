/// Configuration utilities - loading and saving
use super::schemas::Config;
use crate::logger::{self, LogTag};
use std::path::{Path, PathBuf};

/// Resolve which config file to read: explicit override or the data directory default
pub fn resolve_config_path(override_path: Option<&str>) -> PathBuf {
    match override_path {
        Some(path) => PathBuf::from(path),
        None => crate::paths::get_config_path(),
    }
}

/// Load configuration from a specific file path
///
/// A missing file is not an error: defaults are used and a warning is logged.
/// The loaded configuration is validated before it is returned.
pub fn load_config_from_path(path: &Path) -> Result<Config, String> {
    let config = if path.exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = toml::from_str::<Config>(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        logger::info(
            LogTag::Config,
            &format!("Loaded configuration from {}", path.display()),
        );
        config
    } else {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path.display()),
        );
        Config::default()
    };

    config
        .validate()
        .map_err(|e| format!("Invalid configuration in '{}': {}", path.display(), e))?;

    Ok(config)
}
