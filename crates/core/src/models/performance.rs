use serde::{Deserialize, Serialize};

/// Realized results for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAggregate {
    /// Calendar year
    pub year: i32,

    /// Sum of dividend amounts received in this year
    pub dividend: f64,

    /// Sum of realized capital gains recognized in this year
    pub capital_gain: f64,

    /// Running total of (dividend + capital_gain) across all years up to and
    /// including this one, in ascending year order
    pub cumulative_profit: f64,
}

/// Dividend and realized-gain totals for one period (a year, or lifetime).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub dividend: f64,
    pub capital_gain: f64,
}

impl PeriodTotals {
    /// Dividend and realized gain combined.
    #[must_use]
    pub fn combined(&self) -> f64 {
        self.dividend + self.capital_gain
    }
}

/// Full output of the performance ledger: the yearly series plus the named
/// buckets and ratios the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Every year with activity, ascending, with cumulative running totals
    pub yearly: Vec<YearlyAggregate>,

    /// The calendar year of the query date
    pub current_year: i32,

    /// current_year − 1
    pub previous_year: i32,

    /// Totals for the current calendar year (zeros when it has no activity)
    pub current_year_totals: PeriodTotals,

    /// Totals for the previous calendar year (zeros when it has no activity)
    pub previous_year_totals: PeriodTotals,

    /// All-time totals across the entire history
    pub lifetime_totals: PeriodTotals,

    /// Year-over-year dividend growth percent.
    /// 0 when the previous year's dividend total is 0 — "no growth" is the
    /// defined fallback, not an error.
    pub dividend_growth_pct: f64,

    /// Current year's (dividend + capital_gain) divided by the number of
    /// calendar months elapsed so far this year
    pub monthly_average: f64,
}
