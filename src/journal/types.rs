/// Trade journal data model
use super::dates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// TRADE ENTRY
// =============================================================================

/// Direction of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    #[serde(alias = "LONG")]
    Buy,
    #[serde(alias = "SHORT")]
    Sell,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Buy => "BUY",
            EntryType::Sell => "SELL",
        }
    }

    /// Parse a stored or user-supplied value (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "BUY" | "LONG" => Some(EntryType::Buy),
            "SELL" | "SHORT" => Some(EntryType::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single journal record of one trade
///
/// Every field is optional on the wire so that validation, not
/// deserialization, decides what is missing. The four log lists are opaque
/// JSON passed through unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeEntry {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub entry_type: Option<EntryType>,
    pub capital: Option<f64>,
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
    #[serde(with = "dates::optional_date")]
    pub entry_date: Option<NaiveDate>,
    #[serde(with = "dates::optional_date")]
    pub exit_date: Option<NaiveDate>,
    pub buy_reason_logs: Option<Vec<serde_json::Value>>,
    pub exit_plan_logs: Option<Vec<serde_json::Value>>,
    pub mistake_logs: Option<Vec<serde_json::Value>>,
    pub take_away_logs: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Open,
    Closed,
}

impl TradeEntry {
    /// A trade stays open until it has a sell price
    pub fn status(&self) -> TradeStatus {
        if self.sell_price.is_some() {
            TradeStatus::Closed
        } else {
            TradeStatus::Open
        }
    }

    /// Quantity-equivalent bought: capital scaled by the entry price
    pub fn quantity(&self) -> Option<f64> {
        match (self.capital, self.buy_price) {
            (Some(capital), Some(buy)) if buy > 0.0 => Some(capital / buy),
            _ => None,
        }
    }

    /// Realised profit/loss: `(sell - buy) * (capital / buy)`
    ///
    /// `None` while open, or when the record cannot support the computation
    /// (missing capital, missing or non-positive buy price).
    pub fn profit_and_loss(&self) -> Option<f64> {
        let sell = self.sell_price?;
        let buy = self.buy_price?;
        Some((sell - buy) * self.quantity()?)
    }

    /// Realised return in percent of the entry price
    pub fn profit_and_loss_percentage(&self) -> Option<f64> {
        let sell = self.sell_price?;
        match self.buy_price {
            Some(buy) if buy > 0.0 => Some((sell - buy) * 100.0 / buy),
            _ => None,
        }
    }

    /// Whole days between entry and exit; derived, never stored
    pub fn days_held(&self) -> Option<i64> {
        match (self.entry_date, self.exit_date) {
            (Some(entry), Some(exit)) => Some((exit - entry).num_days()),
            _ => None,
        }
    }
}

/// Trade entry as returned over HTTP: the stored record plus derived fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEntryView {
    #[serde(flatten)]
    pub entry: TradeEntry,
    pub status: TradeStatus,
    pub profit_and_loss: Option<f64>,
    pub profit_and_loss_percentage: Option<f64>,
    pub days_held: Option<i64>,
}

impl From<TradeEntry> for TradeEntryView {
    fn from(entry: TradeEntry) -> Self {
        Self {
            status: entry.status(),
            profit_and_loss: entry.profit_and_loss(),
            profit_and_loss_percentage: entry.profit_and_loss_percentage(),
            days_held: entry.days_held(),
            entry,
        }
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Validated dashboard window, both bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardRequestContext {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// Aggregate statistics over the closed trades of a window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_trades: usize,
    pub positive_trades_count: usize,
    pub negative_trades_count: usize,
    pub net_realised_profit_and_loss: f64,
    /// Sorted, so responses are deterministic
    pub entities_traded: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn closed_trade() -> TradeEntry {
        TradeEntry {
            symbol: Some("NIFTY".to_string()),
            entry_type: Some(EntryType::Buy),
            capital: Some(1000.0),
            buy_price: Some(50.0),
            sell_price: Some(55.0),
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            exit_date: NaiveDate::from_ymd_opt(2024, 3, 11),
            ..Default::default()
        }
    }

    #[test]
    fn test_derived_fields() {
        let trade = closed_trade();
        assert_eq!(trade.status(), TradeStatus::Closed);
        assert_eq!(trade.quantity(), Some(20.0));
        assert_eq!(trade.profit_and_loss(), Some(100.0));
        assert_eq!(trade.profit_and_loss_percentage(), Some(10.0));
        assert_eq!(trade.days_held(), Some(10));
    }

    #[test]
    fn test_open_trade_has_no_realised_figures() {
        let trade = TradeEntry {
            sell_price: None,
            exit_date: None,
            ..closed_trade()
        };
        assert_eq!(trade.status(), TradeStatus::Open);
        assert_eq!(trade.profit_and_loss(), None);
        assert_eq!(trade.profit_and_loss_percentage(), None);
        assert_eq!(trade.days_held(), None);
    }

    #[test]
    fn test_zero_buy_price_has_no_profit_and_loss() {
        let trade = TradeEntry {
            buy_price: Some(0.0),
            ..closed_trade()
        };
        assert_eq!(trade.profit_and_loss(), None);
        assert_eq!(trade.profit_and_loss_percentage(), None);
    }

    #[test]
    fn test_deserialize_client_payload() {
        let trade: TradeEntry = serde_json::from_value(json!({
            "symbol": "RELIANCE",
            "entryType": "LONG",
            "capital": 25000,
            "buyPrice": 2450.5,
            "sellPrice": null,
            "entryDate": "2026-01-07T00:00:00.000Z",
            "exitDate": null,
            "buyReasonLogs": [{"timestamp": "2026-01-07T09:15:00Z", "log": "breakout"}]
        }))
        .unwrap();

        assert_eq!(trade.id, None);
        assert_eq!(trade.entry_type, Some(EntryType::Buy));
        assert_eq!(trade.capital, Some(25000.0));
        assert_eq!(trade.entry_date, NaiveDate::from_ymd_opt(2026, 1, 7));
        assert_eq!(trade.exit_date, None);
        assert_eq!(trade.buy_reason_logs.as_ref().map(Vec::len), Some(1));
        assert_eq!(trade.mistake_logs, None);
    }

    #[test]
    fn test_invalid_entry_type_is_rejected() {
        let result = serde_json::from_value::<TradeEntry>(json!({ "entryType": "HOLD" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = TradeEntryView::from(closed_trade());
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["symbol"], "NIFTY");
        assert_eq!(value["entryType"], "BUY");
        assert_eq!(value["entryDate"], "2024-03-01");
        assert_eq!(value["status"], "CLOSED");
        assert_eq!(value["profitAndLoss"], 100.0);
        assert_eq!(value["daysHeld"], 10);
    }

    #[test]
    fn test_dashboard_data_field_names() {
        let data = DashboardData {
            total_trades: 1,
            positive_trades_count: 1,
            entities_traded: ["B", "A"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["totalTrades"], 1);
        assert_eq!(value["negativeTradesCount"], 0);
        assert_eq!(value["netRealisedProfitAndLoss"], 0.0);
        assert_eq!(value["entitiesTraded"], json!(["A", "B"]));
    }
}
