use anyhow::Context;
use std::sync::Arc;

use trade_journal::{
    arguments::{
        get_config_path_override, get_enabled_debug_modes, get_port_override, patterns,
        print_help,
    },
    config::{load_config_from_path, resolve_config_path},
    journal::{JournalService, SqliteTradeStore},
    logger::{self, LogTag},
    webserver::{self, AppState},
};

/// Main entry point for the trade journal service
///
/// Handles --help / --version, then loads configuration, opens the journal
/// database and serves the HTTP API until Ctrl-C.
#[tokio::main]
async fn main() {
    // Logger needs the logs directory to create its file
    if let Err(e) = trade_journal::paths::ensure_all_directories() {
        eprintln!("Failed to create required directories: {}", e);
        std::process::exit(1);
    }

    logger::init();

    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    if patterns::is_version_requested() {
        println!("trade_journal {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    logger::info(LogTag::System, "Trade journal starting up...");

    let debug_modes = get_enabled_debug_modes();
    if !debug_modes.is_empty() {
        logger::info(
            LogTag::System,
            &format!("Debug logging enabled for: {}", debug_modes.join(", ")),
        );
    }

    match run().await {
        Ok(()) => {
            logger::info(LogTag::System, "Trade journal stopped");
            logger::flush();
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("Trade journal failed: {:#}", e));
            logger::flush();
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config_path = resolve_config_path(get_config_path_override().as_deref());
    let mut config = load_config_from_path(&config_path).map_err(anyhow::Error::msg)?;

    if let Some(port) = get_port_override() {
        logger::info(LogTag::Config, &format!("Port overridden to {}", port));
        config.webserver.port = port;
    }

    let db_path = config.database.resolved_path();
    let store = SqliteTradeStore::open(&db_path, &config.database)
        .map_err(anyhow::Error::msg)
        .context("Failed to open journal database")?;

    let state = AppState::new(config, JournalService::new(Arc::new(store)));

    ctrlc::set_handler(|| {
        logger::info(LogTag::System, "Shutdown requested (Ctrl-C)");
        webserver::shutdown();
    })
    .context("Failed to install Ctrl-C handler")?;

    webserver::start_server(Arc::new(state))
        .await
        .map_err(anyhow::Error::msg)
}
