/// Input validation for trade entries and dashboard requests
use super::dates::{is_date_shaped, parse_date};
use super::types::{DashboardRequestContext, TradeEntry};
use crate::errors::ValidationError;
use serde::Deserialize;

const DATE_FORMAT_MESSAGE: &str = "must be in yyyy-MM-dd format";

// =============================================================================
// TRADE ENTRY
// =============================================================================

/// Check a trade entry before it is persisted
///
/// Rules run in a fixed order and the first violation is returned:
/// symbol, entryType, capital, buyPrice. The symbol is not trimmed.
pub fn validate_trade_entry(entry: &TradeEntry) -> Result<(), ValidationError> {
    if entry.symbol.as_deref().map_or(true, str::is_empty) {
        return Err(ValidationError::MissingField("symbol"));
    }

    if entry.entry_type.is_none() {
        return Err(ValidationError::MissingField("entryType"));
    }

    if !is_strictly_positive(entry.capital) {
        return Err(ValidationError::InvalidValue("capital"));
    }

    if !is_strictly_positive(entry.buy_price) {
        return Err(ValidationError::InvalidValue("buyPrice"));
    }

    Ok(())
}

fn is_strictly_positive(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v > 0.0)
}

// =============================================================================
// DATE RANGE
// =============================================================================

/// Whether `from` is not after `to`
///
/// Lenient by contract: an absent bound, or a bound that does not parse as a
/// calendar date, passes. Required-ness and format are checked separately.
pub fn is_valid_date_range(from: Option<&str>, to: Option<&str>) -> bool {
    let (Some(from), Some(to)) = (from, to) else {
        return true;
    };

    match (parse_date(from), parse_date(to)) {
        (Some(from), Some(to)) => from <= to,
        _ => true,
    }
}

// =============================================================================
// DASHBOARD REQUEST
// =============================================================================

/// Raw `fromDate` / `toDate` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl DashboardQuery {
    #[cfg(test)]
    pub fn new(from_date: &str, to_date: &str) -> Self {
        Self {
            from_date: Some(from_date.to_string()),
            to_date: Some(to_date.to_string()),
        }
    }

    /// Validate the raw parameters into a dashboard window
    ///
    /// All field and range violations are collected and reported together.
    pub fn validate(&self) -> Result<DashboardRequestContext, ValidationError> {
        let mut violations = Vec::new();
        check_date_field("fromDate", self.from_date.as_deref(), &mut violations);
        check_date_field("toDate", self.to_date.as_deref(), &mut violations);

        if !is_valid_date_range(self.from_date.as_deref(), self.to_date.as_deref()) {
            violations.push("fromDate must not be after toDate".to_string());
        }

        if !violations.is_empty() {
            return Err(ValidationError::Constraints(violations));
        }

        let from_date = parse_calendar_date("fromDate", self.from_date.as_deref());
        let to_date = parse_calendar_date("toDate", self.to_date.as_deref());

        match (from_date, to_date) {
            (Ok(from_date), Ok(to_date)) => Ok(DashboardRequestContext { from_date, to_date }),
            (from_date, to_date) => Err(ValidationError::Constraints(
                [from_date.err(), to_date.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

fn check_date_field(name: &str, value: Option<&str>, violations: &mut Vec<String>) {
    let Some(value) = value else {
        violations.push(format!("{} is required", name));
        return;
    };

    if value.trim().is_empty() {
        violations.push(format!("{} is required", name));
    }

    if !is_date_shaped(value) {
        violations.push(format!("{} {}", name, DATE_FORMAT_MESSAGE));
    }
}

fn parse_calendar_date(name: &str, value: Option<&str>) -> Result<chrono::NaiveDate, String> {
    value
        .and_then(parse_date)
        .ok_or_else(|| format!("{} is not a valid calendar date", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::EntryType;
    use chrono::NaiveDate;

    fn valid_entry() -> TradeEntry {
        TradeEntry {
            symbol: Some("TCS".to_string()),
            entry_type: Some(EntryType::Buy),
            capital: Some(10_000.0),
            buy_price: Some(3500.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_entry_accepted() {
        assert_eq!(validate_trade_entry(&valid_entry()), Ok(()));

        let closed = TradeEntry {
            sell_price: Some(3600.0),
            exit_date: NaiveDate::from_ymd_opt(2024, 5, 2),
            ..valid_entry()
        };
        assert_eq!(validate_trade_entry(&closed), Ok(()));
    }

    #[test]
    fn test_symbol_rules() {
        let missing = TradeEntry {
            symbol: None,
            ..valid_entry()
        };
        assert_eq!(
            validate_trade_entry(&missing),
            Err(ValidationError::MissingField("symbol"))
        );

        let empty = TradeEntry {
            symbol: Some(String::new()),
            ..valid_entry()
        };
        assert_eq!(
            validate_trade_entry(&empty),
            Err(ValidationError::MissingField("symbol"))
        );

        // Whitespace is preserved as-is, not trimmed away
        let blank = TradeEntry {
            symbol: Some("  ".to_string()),
            ..valid_entry()
        };
        assert_eq!(validate_trade_entry(&blank), Ok(()));
    }

    #[test]
    fn test_numeric_rules() {
        for capital in [None, Some(0.0), Some(-5.0)] {
            let entry = TradeEntry {
                capital,
                ..valid_entry()
            };
            assert_eq!(
                validate_trade_entry(&entry),
                Err(ValidationError::InvalidValue("capital"))
            );
        }

        for buy_price in [None, Some(0.0), Some(-0.01)] {
            let entry = TradeEntry {
                buy_price,
                ..valid_entry()
            };
            assert_eq!(
                validate_trade_entry(&entry),
                Err(ValidationError::InvalidValue("buyPrice"))
            );
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let mut entry = TradeEntry::default();
        assert_eq!(
            validate_trade_entry(&entry),
            Err(ValidationError::MissingField("symbol"))
        );

        entry.symbol = Some("INFY".to_string());
        assert_eq!(
            validate_trade_entry(&entry),
            Err(ValidationError::MissingField("entryType"))
        );

        entry.entry_type = Some(EntryType::Sell);
        assert_eq!(
            validate_trade_entry(&entry),
            Err(ValidationError::InvalidValue("capital"))
        );

        entry.capital = Some(1.0);
        assert_eq!(
            validate_trade_entry(&entry),
            Err(ValidationError::InvalidValue("buyPrice"))
        );

        entry.buy_price = Some(1.0);
        assert_eq!(validate_trade_entry(&entry), Ok(()));
    }

    #[test]
    fn test_date_range_leniency() {
        assert!(is_valid_date_range(None, Some("2024-01-01")));
        assert!(is_valid_date_range(Some("2024-01-01"), None));
        assert!(is_valid_date_range(None, None));
        assert!(is_valid_date_range(Some("not-a-date"), Some("2024-01-01")));
        assert!(is_valid_date_range(Some("2024-02-01"), Some("2024-13-01")));
        // Non-ISO spellings do not parse, so they cannot fail the ordering check
        assert!(is_valid_date_range(Some("2024-2-1"), Some("2024-01-01")));
        assert!(is_valid_date_range(Some(" 2024-02-01"), Some("2024-01-01")));
        assert!(is_valid_date_range(Some("+2024-02-01"), Some("2024-01-01")));
    }

    #[test]
    fn test_date_range_ordering() {
        assert!(!is_valid_date_range(Some("2024-02-01"), Some("2024-01-01")));
        assert!(is_valid_date_range(Some("2024-01-01"), Some("2024-01-01")));
        assert!(is_valid_date_range(Some("2023-12-31"), Some("2024-01-01")));
    }

    #[test]
    fn test_dashboard_query_valid() {
        let ctx = DashboardQuery::new("2024-01-01", "2024-01-31").validate().unwrap();
        assert_eq!(ctx.from_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(ctx.to_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_dashboard_query_missing_fields() {
        let err = DashboardQuery::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "fromDate is required, toDate is required");
    }

    #[test]
    fn test_dashboard_query_blank_and_malformed() {
        let query = DashboardQuery::new("", "01/31/2024");
        assert_eq!(
            query.validate().unwrap_err().to_string(),
            "fromDate is required, fromDate must be in yyyy-MM-dd format, \
             toDate must be in yyyy-MM-dd format"
        );
    }

    #[test]
    fn test_dashboard_query_inverted_range() {
        let err = DashboardQuery::new("2024-02-01", "2024-01-01")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "fromDate must not be after toDate");
    }

    #[test]
    fn test_dashboard_query_impossible_calendar_date() {
        let err = DashboardQuery::new("2024-02-30", "2024-03-01")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "fromDate is not a valid calendar date");
    }
}
