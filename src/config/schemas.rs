/// Configuration schemas - all config structures defined once with defaults
use crate::config_struct;
use std::path::PathBuf;

// ============================================================================
// WEBSERVER CONFIGURATION
// ============================================================================

config_struct! {
    /// HTTP server configuration
    pub struct WebserverConfig {
        host: String = "127.0.0.1".to_string(),
        port: u16 = 8080,
        /// Origins allowed by CORS; empty allows any origin
        cors_allowed_origins: Vec<String> = vec!["http://localhost:5173".to_string()],
    }
}

// ============================================================================
// DATABASE CONFIGURATION
// ============================================================================

config_struct! {
    /// Trade store configuration
    pub struct DatabaseConfig {
        /// SQLite file; empty uses `<data dir>/journal.db`
        path: String = String::new(),
        pool_size: u32 = 5,
        busy_timeout_ms: u64 = 10_000,
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        webserver: WebserverConfig = WebserverConfig::default(),
        database: DatabaseConfig = DatabaseConfig::default(),
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl WebserverConfig {
    /// Validate webserver configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        Ok(())
    }

    /// Get the full bind address (host:port)
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.pool_size == 0 {
            return Err("Database pool_size must be > 0".to_string());
        }

        Ok(())
    }

    /// Resolved database file location
    pub fn resolved_path(&self) -> PathBuf {
        if self.path.trim().is_empty() {
            crate::paths::get_journal_db_path()
        } else {
            PathBuf::from(&self.path)
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        self.webserver.validate()?;
        self.database.validate()?;
        Ok(())
    }
}
