use serde::{Deserialize, Serialize};

/// A current position in one instrument, derived by folding the full
/// transaction log. Recomputed on every query — never persisted.
///
/// Invariant: `total_invested == quantity * average_cost` for open
/// positions, and both are exactly 0 once a position is fully closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Instrument ticker
    pub ticker: String,

    /// Display name — the last name seen while folding this ticker's events
    pub name: String,

    /// Units currently held (> 0 for every holding returned)
    pub quantity: f64,

    /// Weighted-average cost per unit, fees included.
    /// Recomputed on every buy; unchanged by sells.
    pub average_cost: f64,

    /// Capital currently tied up: quantity × average_cost
    pub total_invested: f64,

    /// User-estimated annual dividend per share (0 when no estimate is set).
    /// Comes from the user-maintained estimate mapping, not from history.
    pub estimated_dividend_per_share: f64,

    /// Projected annual dividend income: quantity × estimated rate
    pub estimated_total_dividend: f64,
}

impl Holding {
    /// A fresh zero position for a ticker, seeded on first sight during a fold.
    pub(crate) fn empty(ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            quantity: 0.0,
            average_cost: 0.0,
            total_invested: 0.0,
            estimated_dividend_per_share: 0.0,
            estimated_total_dividend: 0.0,
        }
    }
}
