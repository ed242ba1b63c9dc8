/// Log tags identifying the subsystem that emitted a line

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Database,
    Journal,
    Dashboard,
    Webserver,
}

impl LogTag {
    /// Key used by `--debug-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Database => "database".to_string(),
            LogTag::Journal => "journal".to_string(),
            LogTag::Dashboard => "dashboard".to_string(),
            LogTag::Webserver => "webserver".to_string(),
        }
    }

    /// Uncoloured label used in log files
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Database => "DATABASE".to_string(),
            LogTag::Journal => "JOURNAL".to_string(),
            LogTag::Dashboard => "DASHBOARD".to_string(),
            LogTag::Webserver => "WEBSERVER".to_string(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
