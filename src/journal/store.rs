/// Persistence boundary for trade entries
use super::types::TradeEntry;
use chrono::NaiveDate;

/// Storage backend for journal entries
///
/// Implementations must be shareable across request handlers. Errors are
/// plain strings; the service layer wraps them into `JournalError::Store`.
pub trait TradeStore: Send + Sync {
    /// Insert or fully replace an entry, assigning an id when absent
    fn save(&self, entry: TradeEntry) -> Result<TradeEntry, String>;

    /// Every stored entry, oldest first
    fn find_all(&self) -> Result<Vec<TradeEntry>, String>;

    fn find_by_id(&self, id: &str) -> Result<Option<TradeEntry>, String>;

    /// Entries with a sell price whose exit date lies in `[from, to]`
    fn find_closed_in_range(&self, from: NaiveDate, to: NaiveDate)
        -> Result<Vec<TradeEntry>, String>;
}
