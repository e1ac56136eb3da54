use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Side of a trade.
///
/// Serializes as `"BUY"` / `"SELL"` — the vocabulary used by the CSV and
/// JSON interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeType {
    /// Acquiring units of an instrument
    Buy,
    /// Disposing of units of an instrument
    Sell,
}

impl TradeType {
    /// Secondary sort key for the aggregation folds: on equal dates, every
    /// buy is folded before any sell.
    pub(crate) fn fold_rank(self) -> u8 {
        match self {
            TradeType::Buy => 0,
            TradeType::Sell => 1,
        }
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeType::Buy => write!(f, "BUY"),
            TradeType::Sell => write!(f, "SELL"),
        }
    }
}

impl std::str::FromStr for TradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(TradeType::Buy),
            "SELL" => Ok(TradeType::Sell),
            other => Err(format!("unknown trade type '{other}'")),
        }
    }
}

/// Sort order for transaction listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionSortOrder {
    /// Newest date first (default for display)
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Alphabetical by ticker
    TickerAsc,
    /// Reverse alphabetical by ticker
    TickerDesc,
    /// Largest trade value (quantity × price) first
    ValueDesc,
    /// Smallest trade value first
    ValueAsc,
}

/// A single buy/sell trade.
///
/// Immutable once recorded — derived holdings and realized gains are always
/// recomputed from the full transaction log, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Trade date (no time component — daily granularity)
    pub date: NaiveDate,

    /// Instrument ticker, uppercased (e.g., "VOO", "AAPL")
    pub ticker: String,

    /// Display name for the instrument (not authoritative)
    pub name: String,

    /// Buy or Sell
    pub trade_type: TradeType,

    /// Number of units traded (always positive)
    pub quantity: f64,

    /// Per-unit trade price
    pub price: f64,

    /// Transaction cost (brokerage fees, taxes rolled into the trade)
    pub fees: f64,

    /// Optional free-text notes (e.g., reason, broker, memo)
    #[serde(default)]
    pub notes: Option<String>,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trade_type: TradeType,
        ticker: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        price: f64,
        fees: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            ticker: ticker.into().to_uppercase(),
            name: name.into(),
            trade_type,
            quantity,
            price,
            fees,
            notes: None,
        }
    }

    /// Create a transaction with notes attached.
    #[allow(clippy::too_many_arguments)]
    pub fn with_notes(
        trade_type: TradeType,
        ticker: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        price: f64,
        fees: f64,
        date: NaiveDate,
        notes: impl Into<String>,
    ) -> Self {
        let mut tx = Self::new(trade_type, ticker, name, quantity, price, fees, date);
        tx.notes = Some(notes.into());
        tx
    }

    /// The ordering both aggregation folds rely on: ascending date, and on
    /// equal dates all buys before any sell.
    ///
    /// This is a tie-break policy, not insertion order — a same-day
    /// buy-then-sell must see the bought units regardless of entry order.
    pub fn fold_cmp(a: &Transaction, b: &Transaction) -> Ordering {
        a.date
            .cmp(&b.date)
            .then_with(|| a.trade_type.fold_rank().cmp(&b.trade_type.fold_rank()))
    }

    /// Gross trade value (quantity × price), before fees.
    #[must_use]
    pub fn gross_value(&self) -> f64 {
        self.quantity * self.price
    }
}
