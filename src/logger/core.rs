/// Core logging implementation with automatic filtering
///
/// Decides whether a line is shown, then hands it to the format module.
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    should_log_with(&get_logger_config(), tag, level)
}

/// Filtering rules, applied in order:
/// 1. Errors are always shown
/// 2. If enabled_tags is non-empty, tag must be in the set
/// 3. --quiet hides everything above its threshold, tag flags included
/// 4. Debug level requires --debug-<tag> for that tag (or --verbose)
/// 5. Verbose level requires --verbose OR --verbose-<tag>
/// 6. Everything else is checked against the minimum level threshold
fn should_log_with(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    let key = tag.to_debug_key();

    if !config.enabled_tags.is_empty() && !config.enabled_tags.contains(&key) {
        return false;
    }

    if config.min_level < LogLevel::Info && level > config.min_level {
        return false;
    }

    match level {
        LogLevel::Debug => {
            config.min_level == LogLevel::Verbose || config.debug_tags.contains(&key)
        }
        LogLevel::Verbose => {
            config.min_level == LogLevel::Verbose || config.verbose_tags.contains(&key)
        }
        _ => level <= config.min_level,
    }
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level.as_str(), message);
}
