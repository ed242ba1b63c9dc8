/// Centralized argument handling for the trade journal
///
/// Command-line arguments are captured once into a global store so that any
/// module (logger, config loader, server bootstrap) can query flags without
/// threading them through every call.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Debug tags that can be enabled with `--debug-<tag>`
pub const DEBUG_TAGS: &[&str] = &["system", "config", "database", "journal", "dashboard", "webserver"];

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Whether `--debug-<tag>` was passed
pub fn is_debug_enabled(tag: &str) -> bool {
    has_arg(&format!("--debug-{}", tag))
}

/// Gets a list of all enabled debug modes
pub fn get_enabled_debug_modes() -> Vec<&'static str> {
    DEBUG_TAGS
        .iter()
        .copied()
        .filter(|tag| is_debug_enabled(tag))
        .collect()
}

/// Config file override (`--config <path>`)
pub fn get_config_path_override() -> Option<String> {
    get_arg_value("--config")
}

/// Port override (`--port <n>`), ignored when not a valid port number
pub fn get_port_override() -> Option<u16> {
    get_arg_value("--port").and_then(|s| s.parse().ok())
}

/// Prints usage for the main binary
pub fn print_help() {
    println!("trade_journal {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Trading journal service: records trades and serves dashboard metrics over HTTP.");
    println!();
    println!("USAGE:");
    println!("    trade_journal [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>      Load configuration from <path> instead of the data directory");
    println!("    --port <n>           Override the configured HTTP port");
    println!("    --quiet, -q          Only show warnings and errors (overrides --debug-<tag>)");
    println!("    --verbose, -v        Show debug and verbose logs for every tag");
    println!("    --debug-<tag>        Enable debug logs for a tag ({})", DEBUG_TAGS.join(", "));
    println!("    --verbose-<tag>      Enable verbose logs for a single tag");
    println!("    --log-tags=<tags>    Only show logs for these comma-separated tags (errors always shown)");
    println!("    --no-log-file        Do not write the daily log file");
    println!("    --version, -V        Print version and exit");
    println!("    --help, -h           Print this help and exit");
}

/// Common argument parsing patterns
pub mod patterns {
    use super::*;

    /// Checks for help flags
    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }

    /// Checks for version flags
    pub fn is_version_requested() -> bool {
        has_arg("--version") || has_arg("-V")
    }

    /// Checks for quiet/silent mode
    pub fn is_quiet_mode() -> bool {
        has_arg("--quiet") || has_arg("-q")
    }

    /// Checks for verbose mode
    pub fn is_verbose_mode() -> bool {
        has_arg("--verbose") || has_arg("-v")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the argument store is process-global.
    #[test]
    fn test_argument_helpers() {
        set_cmd_args(vec![
            "trade_journal".to_string(),
            "--debug-journal".to_string(),
            "--config".to_string(),
            "/tmp/journal.toml".to_string(),
            "--port".to_string(),
            "9000".to_string(),
            "-q".to_string(),
        ]);

        assert!(has_arg("--debug-journal"));
        assert!(!has_arg("--debug-dashboard"));
        assert_eq!(get_config_path_override(), Some("/tmp/journal.toml".to_string()));
        assert_eq!(get_port_override(), Some(9000));
        assert_eq!(get_enabled_debug_modes(), vec!["journal"]);
        assert!(patterns::is_quiet_mode());
        assert!(!patterns::is_help_requested());

        set_cmd_args(vec!["trade_journal".to_string(), "--port".to_string(), "http".to_string()]);
        assert_eq!(get_port_override(), None);
        assert_eq!(get_arg_value("--config"), None);

        set_cmd_args(vec!["trade_journal".to_string(), "--port".to_string()]);
        assert_eq!(get_port_override(), None);
    }
}
