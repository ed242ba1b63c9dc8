/// Trade journal core
///
/// - `types`: trade entries, derived figures and dashboard shapes
/// - `dates`: calendar date rules shared by serde and the store
/// - `validation`: trade entry and dashboard request checks
/// - `dashboard`: aggregation over closed trades
/// - `store` / `db`: persistence trait and its SQLite implementation
/// - `service`: the operations exposed over HTTP
pub mod dashboard;
pub mod dates;
pub mod db;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

pub use dashboard::aggregate;
pub use db::SqliteTradeStore;
pub use service::JournalService;
pub use store::TradeStore;
pub use types::{
    DashboardData, DashboardRequestContext, EntryType, TradeEntry, TradeEntryView, TradeStatus,
};
pub use validation::{is_valid_date_range, validate_trade_entry, DashboardQuery};
