/// Shared application state for the webserver
///
/// Built once at startup and handed to every route handler; read-only after.
use crate::{config::Config, journal::JournalService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub journal: JournalService,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: Config, journal: JournalService) -> Self {
        Self {
            config: Arc::new(config),
            journal,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
