use std::collections::HashMap;

use crate::models::holding::Holding;
use crate::models::transaction::{TradeType, Transaction};

/// Folds the full transaction log into current per-instrument positions
/// with weighted-average cost.
///
/// Pure business logic — no I/O, no stored state. The fold never fails:
/// overselling clamps to the held quantity and degenerate arithmetic
/// resolves to zeros, so bad data degrades instead of crashing.
pub struct HoldingsService;

impl HoldingsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the set of currently open holdings.
    ///
    /// Transactions are folded in ascending date order; on equal dates all
    /// buys are applied before any sell, so a same-day round trip sees the
    /// bought units. `dividend_estimates` maps ticker → estimated annual
    /// dividend per share (absent tickers get rate 0).
    ///
    /// Positions that fold down to zero quantity are dropped from the
    /// result. A sell against a never-bought ticker is a no-op. Output is
    /// sorted by ticker; display layers re-sort as they like.
    #[must_use]
    pub fn compute(
        &self,
        transactions: &[Transaction],
        dividend_estimates: &HashMap<String, f64>,
    ) -> Vec<Holding> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| Transaction::fold_cmp(a, b));

        let mut positions: HashMap<String, Holding> = HashMap::new();

        for tx in sorted {
            let holding = positions
                .entry(tx.ticker.clone())
                .or_insert_with(|| Holding::empty(&tx.ticker, &tx.name));
            holding.name = tx.name.clone();

            match tx.trade_type {
                TradeType::Buy => {
                    holding.total_invested += tx.quantity * tx.price + tx.fees;
                    holding.quantity += tx.quantity;
                    // quantity > 0 here: tx.quantity is positive by contract
                    holding.average_cost = holding.total_invested / holding.quantity;
                }
                TradeType::Sell => {
                    // Overselling is clamped, never rejected — the excess is
                    // simply not applied.
                    let sold = tx.quantity.min(holding.quantity);
                    holding.quantity -= sold;
                    if holding.quantity > 0.0 {
                        // Average cost is unchanged by a sell; only the
                        // invested capital shrinks proportionally.
                        holding.total_invested = holding.quantity * holding.average_cost;
                    } else {
                        // Closing a position wipes its cost basis.
                        // Reopening later starts a fresh average.
                        holding.total_invested = 0.0;
                        holding.average_cost = 0.0;
                    }
                }
            }
        }

        let mut holdings: Vec<Holding> = positions
            .into_values()
            .filter(|h| h.quantity > 0.0)
            .map(|mut h| {
                let rate = dividend_estimates.get(&h.ticker).copied().unwrap_or(0.0);
                h.estimated_dividend_per_share = rate;
                h.estimated_total_dividend = h.quantity * rate;
                h
            })
            .collect();

        holdings.sort_by(|a, b| a.ticker.cmp(&b.ticker));
        holdings
    }
}

impl Default for HoldingsService {
    fn default() -> Self {
        Self::new()
    }
}
