//! SQLite-backed trade store
//!
//! Entries live in a single `trade_entries` table. Dates are stored as
//! `yyyy-MM-dd` text so range queries compare lexicographically, and the four
//! log lists are stored as JSON text.

use super::dates::{format_date, parse_date};
use super::store::TradeStore;
use super::types::{EntryType, TradeEntry};
use crate::config::DatabaseConfig;
use crate::logger::{self, LogTag};
use chrono::{NaiveDate, SecondsFormat, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension, Row};
use std::path::Path;
use std::time::Duration;

const SELECT_COLUMNS: &str = "id, symbol, entry_type, capital, buy_price, sell_price, \
     entry_date, exit_date, buy_reason_logs, exit_plan_logs, mistake_logs, take_away_logs";

// =============================================================================
// STORE
// =============================================================================

pub struct SqliteTradeStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteTradeStore {
    /// Open (or create) the journal database at `path`
    pub fn open(path: &Path, config: &DatabaseConfig) -> Result<Self, String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create data directory: {}", e))?;
            }
        }

        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.pragma_update(None, "synchronous", "NORMAL")?;
            conn.busy_timeout(busy_timeout)?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(config.pool_size)
            .build(manager)
            .map_err(|e| format!("Failed to create connection pool: {}", e))?;

        let store = Self::with_pool(pool)?;

        logger::info(
            LogTag::Database,
            &format!("Journal database initialized at {}", path.display()),
        );

        Ok(store)
    }

    /// Private in-memory database, used by tests and ephemeral runs
    ///
    /// Every in-memory connection is its own database, so the pool holds one.
    pub fn in_memory() -> Result<Self, String> {
        let pool = Pool::builder()
            .max_size(1)
            .build(SqliteConnectionManager::memory())
            .map_err(|e| format!("Failed to create connection pool: {}", e))?;

        Self::with_pool(pool)
    }

    fn with_pool(pool: Pool<SqliteConnectionManager>) -> Result<Self, String> {
        let store = Self { pool };
        initialize_schema(&*store.connection()?)?;
        Ok(store)
    }

    fn connection(&self) -> Result<PooledConnection<SqliteConnectionManager>, String> {
        self.pool
            .get()
            .map_err(|e| format!("Failed to get connection: {}", e))
    }

    fn query_entries(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<TradeEntry>, String> {
        let conn = self.connection()?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| format!("Failed to prepare statement: {}", e))?;

        let rows = stmt
            .query_map(params, TradeRow::from_row)
            .map_err(|e| format!("Failed to query trades: {}", e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to collect trades: {}", e))?;

        rows.into_iter().map(TradeRow::into_entry).collect()
    }
}

fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS trade_entries (
            id TEXT PRIMARY KEY,
            symbol TEXT,
            entry_type TEXT,
            capital REAL,
            buy_price REAL,
            sell_price REAL,
            entry_date TEXT,
            exit_date TEXT,
            buy_reason_logs TEXT,
            exit_plan_logs TEXT,
            mistake_logs TEXT,
            take_away_logs TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| format!("Failed to create trade_entries table: {}", e))?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_trade_entries_exit_date ON trade_entries(exit_date)",
        [],
    )
    .map_err(|e| format!("Failed to create exit_date index: {}", e))?;

    Ok(())
}

impl TradeStore for SqliteTradeStore {
    fn save(&self, mut entry: TradeEntry) -> Result<TradeEntry, String> {
        let id = entry
            .id
            .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
            .clone();
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let conn = self.connection()?;

        conn.execute(
            "INSERT INTO trade_entries (
                id, symbol, entry_type, capital, buy_price, sell_price,
                entry_date, exit_date, buy_reason_logs, exit_plan_logs,
                mistake_logs, take_away_logs, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)
            ON CONFLICT(id) DO UPDATE SET
                symbol = excluded.symbol,
                entry_type = excluded.entry_type,
                capital = excluded.capital,
                buy_price = excluded.buy_price,
                sell_price = excluded.sell_price,
                entry_date = excluded.entry_date,
                exit_date = excluded.exit_date,
                buy_reason_logs = excluded.buy_reason_logs,
                exit_plan_logs = excluded.exit_plan_logs,
                mistake_logs = excluded.mistake_logs,
                take_away_logs = excluded.take_away_logs,
                updated_at = excluded.updated_at",
            params![
                &id,
                &entry.symbol,
                entry.entry_type.map(|t| t.as_str()),
                entry.capital,
                entry.buy_price,
                entry.sell_price,
                entry.entry_date.as_ref().map(format_date),
                entry.exit_date.as_ref().map(format_date),
                encode_logs(&entry.buy_reason_logs)?,
                encode_logs(&entry.exit_plan_logs)?,
                encode_logs(&entry.mistake_logs)?,
                encode_logs(&entry.take_away_logs)?,
                &now,
            ],
        )
        .map_err(|e| format!("Failed to save trade {}: {}", id, e))?;

        logger::debug(LogTag::Database, &format!("Saved trade {}", id));

        Ok(entry)
    }

    fn find_all(&self) -> Result<Vec<TradeEntry>, String> {
        self.query_entries(
            &format!(
                "SELECT {} FROM trade_entries ORDER BY created_at, rowid",
                SELECT_COLUMNS
            ),
            params![],
        )
    }

    fn find_by_id(&self, id: &str) -> Result<Option<TradeEntry>, String> {
        let conn = self.connection()?;
        let row = conn
            .query_row(
                &format!("SELECT {} FROM trade_entries WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                TradeRow::from_row,
            )
            .optional()
            .map_err(|e| format!("Failed to query trade {}: {}", id, e))?;

        row.map(TradeRow::into_entry).transpose()
    }

    fn find_closed_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TradeEntry>, String> {
        let trades = self.query_entries(
            &format!(
                "SELECT {} FROM trade_entries
                 WHERE sell_price IS NOT NULL
                   AND exit_date IS NOT NULL
                   AND exit_date BETWEEN ?1 AND ?2
                 ORDER BY exit_date, rowid",
                SELECT_COLUMNS
            ),
            params![format_date(&from), format_date(&to)],
        )?;

        logger::debug(
            LogTag::Database,
            &format!(
                "Found {} closed trades between {} and {}",
                trades.len(),
                from,
                to
            ),
        );

        Ok(trades)
    }
}

// =============================================================================
// ROW MAPPING
// =============================================================================

/// Raw column values, converted outside the rusqlite callback
struct TradeRow {
    id: String,
    symbol: Option<String>,
    entry_type: Option<String>,
    capital: Option<f64>,
    buy_price: Option<f64>,
    sell_price: Option<f64>,
    entry_date: Option<String>,
    exit_date: Option<String>,
    buy_reason_logs: Option<String>,
    exit_plan_logs: Option<String>,
    mistake_logs: Option<String>,
    take_away_logs: Option<String>,
}

impl TradeRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            symbol: row.get(1)?,
            entry_type: row.get(2)?,
            capital: row.get(3)?,
            buy_price: row.get(4)?,
            sell_price: row.get(5)?,
            entry_date: row.get(6)?,
            exit_date: row.get(7)?,
            buy_reason_logs: row.get(8)?,
            exit_plan_logs: row.get(9)?,
            mistake_logs: row.get(10)?,
            take_away_logs: row.get(11)?,
        })
    }

    fn into_entry(self) -> Result<TradeEntry, String> {
        let entry_type = self
            .entry_type
            .map(|raw| {
                EntryType::parse(&raw)
                    .ok_or_else(|| format!("Trade {} has unknown entry type '{}'", self.id, raw))
            })
            .transpose()?;

        Ok(TradeEntry {
            entry_type,
            symbol: self.symbol,
            capital: self.capital,
            buy_price: self.buy_price,
            sell_price: self.sell_price,
            entry_date: decode_date(&self.id, self.entry_date)?,
            exit_date: decode_date(&self.id, self.exit_date)?,
            buy_reason_logs: decode_logs(&self.id, self.buy_reason_logs)?,
            exit_plan_logs: decode_logs(&self.id, self.exit_plan_logs)?,
            mistake_logs: decode_logs(&self.id, self.mistake_logs)?,
            take_away_logs: decode_logs(&self.id, self.take_away_logs)?,
            id: Some(self.id),
        })
    }
}

fn decode_date(id: &str, raw: Option<String>) -> Result<Option<NaiveDate>, String> {
    raw.map(|value| {
        parse_date(&value).ok_or_else(|| format!("Trade {} has invalid date '{}'", id, value))
    })
    .transpose()
}

fn encode_logs(logs: &Option<Vec<serde_json::Value>>) -> Result<Option<String>, String> {
    logs.as_ref()
        .map(|logs| {
            serde_json::to_string(logs).map_err(|e| format!("Failed to encode logs: {}", e))
        })
        .transpose()
}

fn decode_logs(id: &str, raw: Option<String>) -> Result<Option<Vec<serde_json::Value>>, String> {
    raw.map(|json| {
        serde_json::from_str(&json)
            .map_err(|e| format!("Trade {} has malformed log column: {}", id, e))
    })
    .transpose()
}
