/// Journal operations: validation, persistence and dashboard aggregation
use super::dashboard::aggregate;
use super::store::TradeStore;
use super::types::{DashboardData, DashboardRequestContext, TradeEntry};
use super::validation::validate_trade_entry;
use crate::errors::JournalError;
use crate::logger::{self, LogTag};
use std::sync::Arc;

#[derive(Clone)]
pub struct JournalService {
    store: Arc<dyn TradeStore>,
}

impl JournalService {
    pub fn new(store: Arc<dyn TradeStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new entry; any client-supplied id is discarded
    pub fn save_entry(&self, mut entry: TradeEntry) -> Result<TradeEntry, JournalError> {
        validate_trade_entry(&entry).map_err(|e| {
            logger::debug(LogTag::Journal, &format!("Rejected new trade: {}", e));
            e
        })?;

        entry.id = None;
        let saved = self.store.save(entry).map_err(JournalError::Store)?;

        logger::info(
            LogTag::Journal,
            &format!(
                "Created trade {} ({})",
                saved.id.as_deref().unwrap_or_default(),
                saved.symbol.as_deref().unwrap_or_default()
            ),
        );

        Ok(saved)
    }

    pub fn get_all_entries(&self) -> Result<Vec<TradeEntry>, JournalError> {
        let entries = self.store.find_all().map_err(JournalError::Store)?;
        logger::debug(
            LogTag::Journal,
            &format!("Fetched {} trades", entries.len()),
        );
        Ok(entries)
    }

    pub fn get_entry(&self, id: &str) -> Result<TradeEntry, JournalError> {
        self.store
            .find_by_id(id)
            .map_err(JournalError::Store)?
            .ok_or_else(|| JournalError::NotFound { id: id.to_string() })
    }

    /// Replace the entry stored under `id`
    ///
    /// The path id always wins over the body's id. Saving under an id that
    /// does not exist yet inserts it. Only creation is validated; an update
    /// is stored as given.
    pub fn update_entry(&self, id: &str, mut entry: TradeEntry) -> Result<TradeEntry, JournalError> {
        entry.id = Some(id.to_string());

        let saved = self.store.save(entry).map_err(JournalError::Store)?;
        logger::info(LogTag::Journal, &format!("Updated trade {}", id));
        Ok(saved)
    }

    /// Statistics over trades closed within the window
    pub fn dashboard(&self, ctx: DashboardRequestContext) -> Result<DashboardData, JournalError> {
        let closed = self
            .store
            .find_closed_in_range(ctx.from_date, ctx.to_date)
            .map_err(JournalError::Store)?;

        Ok(aggregate(&closed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::journal::db::SqliteTradeStore;
    use crate::journal::types::EntryType;
    use chrono::NaiveDate;

    fn service() -> JournalService {
        JournalService::new(Arc::new(SqliteTradeStore::in_memory().unwrap()))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(symbol: &str) -> TradeEntry {
        TradeEntry {
            symbol: Some(symbol.to_string()),
            entry_type: Some(EntryType::Buy),
            capital: Some(100.0),
            buy_price: Some(10.0),
            entry_date: Some(date(2024, 1, 2)),
            ..Default::default()
        }
    }

    /// Store whose every call fails
    struct BrokenStore;

    impl TradeStore for BrokenStore {
        fn save(&self, _: TradeEntry) -> Result<TradeEntry, String> {
            Err("database is locked".to_string())
        }
        fn find_all(&self) -> Result<Vec<TradeEntry>, String> {
            Err("database is locked".to_string())
        }
        fn find_by_id(&self, _: &str) -> Result<Option<TradeEntry>, String> {
            Err("database is locked".to_string())
        }
        fn find_closed_in_range(
            &self,
            _: NaiveDate,
            _: NaiveDate,
        ) -> Result<Vec<TradeEntry>, String> {
            Err("database is locked".to_string())
        }
    }

    #[test]
    fn test_save_then_get() {
        let service = service();
        let saved = service
            .save_entry(TradeEntry {
                id: Some("ignored".to_string()),
                ..entry("TCS")
            })
            .unwrap();

        let id = saved.id.clone().unwrap();
        assert_ne!(id, "ignored");
        assert_eq!(service.get_entry(&id).unwrap(), saved);
        assert_eq!(service.get_all_entries().unwrap(), vec![saved]);
    }

    #[test]
    fn test_invalid_entry_not_stored() {
        let service = service();
        let err = service
            .save_entry(TradeEntry {
                capital: Some(0.0),
                ..entry("TCS")
            })
            .unwrap_err();

        assert!(matches!(
            err,
            JournalError::Validation(ValidationError::InvalidValue("capital"))
        ));
        assert!(service.get_all_entries().unwrap().is_empty());
    }

    #[test]
    fn test_get_missing_entry() {
        let err = service().get_entry("nope").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_update_forces_path_id() {
        let service = service();
        let saved = service.save_entry(entry("INFY")).unwrap();
        let id = saved.id.unwrap();

        let updated = service
            .update_entry(
                &id,
                TradeEntry {
                    id: Some("other".to_string()),
                    sell_price: Some(12.0),
                    exit_date: Some(date(2024, 1, 9)),
                    ..entry("INFY")
                },
            )
            .unwrap();

        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(service.get_all_entries().unwrap().len(), 1);
        assert_eq!(service.get_entry(&id).unwrap().sell_price, Some(12.0));
    }

    #[test]
    fn test_update_stores_partial_entry_as_given() {
        let service = service();
        let saved = service.save_entry(entry("HDFC")).unwrap();
        let id = saved.id.unwrap();

        let partial = TradeEntry {
            capital: None,
            buy_price: Some(0.0),
            ..entry("HDFC")
        };
        let updated = service.update_entry(&id, partial).unwrap();

        assert_eq!(updated.capital, None);
        assert_eq!(service.get_entry(&id).unwrap(), updated);
    }

    #[test]
    fn test_dashboard_over_window() {
        let service = service();
        let closed = |symbol: &str, sell: f64, exit: NaiveDate| TradeEntry {
            sell_price: Some(sell),
            exit_date: Some(exit),
            ..entry(symbol)
        };

        service.save_entry(closed("A", 12.0, date(2024, 1, 10))).unwrap();
        service.save_entry(closed("B", 8.0, date(2024, 1, 20))).unwrap();
        service.save_entry(closed("C", 20.0, date(2024, 3, 1))).unwrap();
        service.save_entry(entry("OPEN")).unwrap();

        let data = service
            .dashboard(DashboardRequestContext {
                from_date: date(2024, 1, 1),
                to_date: date(2024, 1, 31),
            })
            .unwrap();

        assert_eq!(data.total_trades, 2);
        assert_eq!(data.positive_trades_count, 1);
        assert_eq!(data.negative_trades_count, 1);
        assert_eq!(data.net_realised_profit_and_loss, 0.0);
        assert_eq!(data.entities_traded.len(), 2);
    }

    #[test]
    fn test_store_failures_surface_as_store_errors() {
        let service = JournalService::new(Arc::new(BrokenStore));

        let err = service.save_entry(entry("A")).unwrap_err();
        assert!(matches!(err, JournalError::Store(_)));
        assert_eq!(err.status_code(), 500);

        assert!(matches!(service.get_all_entries(), Err(JournalError::Store(_))));
        assert!(matches!(service.get_entry("a"), Err(JournalError::Store(_))));
    }
}
