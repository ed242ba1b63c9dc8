/// Dashboard aggregation over closed trades
use super::types::{DashboardData, TradeEntry};
use crate::logger::{self, LogTag};

/// Fold a pre-filtered set of closed trades into dashboard statistics
///
/// The input is trusted: date window and sell-price filtering belong to the
/// store query. A trade that cannot produce a profit/loss figure (missing
/// capital, missing or non-positive buy price) contributes zero but is still
/// counted.
pub fn aggregate(closed_trades: &[TradeEntry]) -> DashboardData {
    let mut data = DashboardData {
        total_trades: closed_trades.len(),
        ..Default::default()
    };
    let mut unpriced = 0usize;

    for trade in closed_trades {
        let pl = match trade.profit_and_loss() {
            Some(pl) => pl,
            None => {
                unpriced += 1;
                0.0
            }
        };

        data.net_realised_profit_and_loss += pl;

        if pl > 0.0 {
            data.positive_trades_count += 1;
        } else if pl < 0.0 {
            data.negative_trades_count += 1;
        }

        if let Some(symbol) = &trade.symbol {
            data.entities_traded.insert(symbol.clone());
        }
    }

    if unpriced > 0 {
        logger::warning(
            LogTag::Dashboard,
            &format!(
                "{} closed trade(s) had no computable profit/loss and contributed 0",
                unpriced
            ),
        );
    }

    logger::debug(
        LogTag::Dashboard,
        &format!(
            "Aggregated {} trades: {} positive, {} negative, net {:.2}, {} symbols",
            data.total_trades,
            data.positive_trades_count,
            data.negative_trades_count,
            data.net_realised_profit_and_loss,
            data.entities_traded.len()
        ),
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::EntryType;

    fn closed(symbol: &str, capital: f64, buy: f64, sell: f64) -> TradeEntry {
        TradeEntry {
            symbol: Some(symbol.to_string()),
            entry_type: Some(EntryType::Buy),
            capital: Some(capital),
            buy_price: Some(buy),
            sell_price: Some(sell),
            ..Default::default()
        }
    }

    #[test]
    fn test_winner_and_loser_cancel_out() {
        let data = aggregate(&[closed("A", 100.0, 10.0, 12.0), closed("B", 100.0, 10.0, 8.0)]);

        assert_eq!(data.total_trades, 2);
        assert_eq!(data.positive_trades_count, 1);
        assert_eq!(data.negative_trades_count, 1);
        assert_eq!(data.net_realised_profit_and_loss, 0.0);
        assert_eq!(
            data.entities_traded.into_iter().collect::<Vec<_>>(),
            vec!["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[]), DashboardData::default());
    }

    #[test]
    fn test_break_even_trade_counts_toward_total_only() {
        let data = aggregate(&[closed("INFY", 5000.0, 1500.0, 1500.0)]);

        assert_eq!(data.total_trades, 1);
        assert_eq!(data.positive_trades_count, 0);
        assert_eq!(data.negative_trades_count, 0);
        assert_eq!(data.net_realised_profit_and_loss, 0.0);
        assert!(data.entities_traded.contains("INFY"));
    }

    #[test]
    fn test_repeated_symbol_listed_once() {
        let data = aggregate(&[
            closed("TCS", 100.0, 10.0, 11.0),
            closed("TCS", 100.0, 10.0, 13.0),
        ]);

        assert_eq!(data.total_trades, 2);
        assert_eq!(data.positive_trades_count, 2);
        assert_eq!(data.net_realised_profit_and_loss, 40.0);
        assert_eq!(data.entities_traded.len(), 1);
    }

    #[test]
    fn test_unusable_buy_price_contributes_zero() {
        let data = aggregate(&[
            closed("ZERO", 100.0, 0.0, 5.0),
            closed("A", 100.0, 10.0, 12.0),
        ]);

        assert_eq!(data.total_trades, 2);
        assert_eq!(data.positive_trades_count, 1);
        assert_eq!(data.negative_trades_count, 0);
        assert_eq!(data.net_realised_profit_and_loss, 20.0);
        assert!(data.entities_traded.contains("ZERO"));
    }
}
