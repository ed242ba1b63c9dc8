/// Logger configuration, derived from command-line flags at startup
use super::levels::LogLevel;
use crate::arguments::{get_cmd_args, patterns};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level shown (Info by default)
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` enabled
    pub debug_tags: HashSet<String>,
    /// Tags with `--verbose-<tag>` enabled
    pub verbose_tags: HashSet<String>,
    /// When non-empty, only these tags are shown (errors always pass)
    pub enabled_tags: HashSet<String>,
    /// Mirror console output into the daily log file
    pub file_logging: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            enabled_tags: HashSet::new(),
            file_logging: true,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Get a snapshot of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(_) => LoggerConfig::default(),
    }
}

/// Replace the logger configuration
pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

/// Mutate the logger configuration in place
pub fn update_logger_config<F: FnOnce(&mut LoggerConfig)>(update: F) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        update(&mut current);
    }
}

/// Build the configuration from the global command-line arguments
pub fn init_from_args() {
    let args = get_cmd_args();
    set_logger_config(config_from_args(&args));

    // Flags are read from the argument store, but quiet/verbose use the shared patterns
    update_logger_config(|config| {
        if patterns::is_verbose_mode() {
            config.min_level = LogLevel::Verbose;
        } else if patterns::is_quiet_mode() {
            config.min_level = LogLevel::Warning;
        }
    });
}

fn config_from_args(args: &[String]) -> LoggerConfig {
    let mut config = LoggerConfig::default();

    for arg in args {
        if let Some(tag) = arg.strip_prefix("--debug-") {
            config.debug_tags.insert(tag.to_lowercase());
        } else if let Some(tag) = arg.strip_prefix("--verbose-") {
            config.verbose_tags.insert(tag.to_lowercase());
        } else if let Some(tags) = arg.strip_prefix("--log-tags=") {
            config.enabled_tags = tags
                .split(',')
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
        } else if arg == "--no-log-file" {
            config.file_logging = false;
        }
    }

    config
}
