use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::models::dividend::Dividend;
use crate::models::performance::{PerformanceReport, PeriodTotals, YearlyAggregate};
use crate::models::transaction::{TradeType, Transaction};

/// Per-ticker running cost basis used while recognizing realized gains.
///
/// Kept separate from the holdings fold on purpose: the two computations
/// are independent consumers of the same event-ordering rule.
struct CostBasis {
    quantity: f64,
    total_cost: f64,
}

/// Folds transactions and dividends into per-year realized gain and
/// dividend totals, lifetime totals, and a cumulative running series.
///
/// Pure business logic — recomputed from scratch on every query, same
/// no-crash policy as the holdings fold.
pub struct PerformanceService;

impl PerformanceService {
    pub fn new() -> Self {
        Self
    }

    /// Every year with activity, ascending, with per-year dividend and
    /// realized-gain totals and the cumulative running profit.
    ///
    /// A year appears in the output if any transaction or dividend is dated
    /// in it, even when one of its two totals is zero.
    #[must_use]
    pub fn yearly_aggregates(
        &self,
        transactions: &[Transaction],
        dividends: &[Dividend],
    ) -> Vec<YearlyAggregate> {
        Self::cumulative_series(self.fold_years(transactions, dividends))
    }

    /// Full dashboard report as of `today`: the yearly series plus named
    /// current-year / previous-year / lifetime buckets and derived ratios.
    ///
    /// `today` decides which calendar year is "current" and how many months
    /// have elapsed; callers pass the wall clock, tests pass a fixed date.
    #[must_use]
    pub fn report(
        &self,
        transactions: &[Transaction],
        dividends: &[Dividend],
        today: NaiveDate,
    ) -> PerformanceReport {
        let years = self.fold_years(transactions, dividends);

        let current_year = today.year();
        let previous_year = current_year - 1;

        // Years without activity resolve to zero totals, not errors.
        let current = years.get(&current_year).copied().unwrap_or_default();
        let previous = years.get(&previous_year).copied().unwrap_or_default();

        let lifetime = years.values().fold(PeriodTotals::default(), |acc, t| PeriodTotals {
            dividend: acc.dividend + t.dividend,
            capital_gain: acc.capital_gain + t.capital_gain,
        });

        // "No growth" is the defined fallback when last year paid nothing.
        let dividend_growth_pct = if previous.dividend > 0.0 {
            (current.dividend - previous.dividend) / previous.dividend * 100.0
        } else {
            0.0
        };

        let months_elapsed = f64::from(today.month());
        let monthly_average = current.combined() / months_elapsed;

        PerformanceReport {
            yearly: Self::cumulative_series(years),
            current_year,
            previous_year,
            current_year_totals: current,
            previous_year_totals: previous,
            lifetime_totals: lifetime,
            dividend_growth_pct,
            monthly_average,
        }
    }

    /// Ascending-year series with the running cumulative profit. The BTreeMap
    /// already iterates in ascending year order, which is what the running
    /// sum requires.
    fn cumulative_series(years: BTreeMap<i32, PeriodTotals>) -> Vec<YearlyAggregate> {
        let mut cumulative = 0.0;
        years
            .into_iter()
            .map(|(year, totals)| {
                cumulative += totals.combined();
                YearlyAggregate {
                    year,
                    dividend: totals.dividend,
                    capital_gain: totals.capital_gain,
                    cumulative_profit: cumulative,
                }
            })
            .collect()
    }

    /// The shared fold: seed every active year, recognize realized gains in
    /// the sell's calendar year, bucket dividends unconditionally.
    fn fold_years(
        &self,
        transactions: &[Transaction],
        dividends: &[Dividend],
    ) -> BTreeMap<i32, PeriodTotals> {
        let mut years: BTreeMap<i32, PeriodTotals> = BTreeMap::new();

        // Every year touched by either collection gets an entry, even if
        // one of its totals stays zero.
        for tx in transactions {
            years.entry(tx.date.year()).or_default();
        }
        for div in dividends {
            years.entry(div.date.year()).or_default();
        }

        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| Transaction::fold_cmp(a, b));

        let mut basis: HashMap<String, CostBasis> = HashMap::new();

        for tx in sorted {
            match tx.trade_type {
                TradeType::Buy => {
                    let entry = basis.entry(tx.ticker.clone()).or_insert(CostBasis {
                        quantity: 0.0,
                        total_cost: 0.0,
                    });
                    entry.quantity += tx.quantity;
                    entry.total_cost += tx.quantity * tx.price + tx.fees;
                }
                TradeType::Sell => {
                    // A sell against an untracked or emptied ticker
                    // contributes nothing — same tolerance as the holdings
                    // fold.
                    let Some(entry) = basis.get_mut(&tx.ticker) else {
                        continue;
                    };
                    if entry.quantity <= 0.0 {
                        continue;
                    }

                    let avg_price = entry.total_cost / entry.quantity;
                    let sold = tx.quantity.min(entry.quantity);
                    // Fees prorate by the executable fraction of the
                    // requested quantity; an unclamped sell pays the full
                    // fee.
                    let net_proceeds = tx.price * sold - tx.fees * (sold / tx.quantity);
                    let gain = net_proceeds - avg_price * sold;

                    years.entry(tx.date.year()).or_default().capital_gain += gain;

                    // Reduce proportionally so the average price survives
                    // for subsequent sells.
                    entry.quantity -= sold;
                    entry.total_cost = entry.quantity * avg_price;
                }
            }
        }

        for div in dividends {
            // No cost-basis gating: a dividend for a never-held ticker
            // still counts.
            years.entry(div.date.year()).or_default().dividend += div.amount;
        }

        years
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}
