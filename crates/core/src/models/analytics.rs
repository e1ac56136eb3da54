use serde::{Deserialize, Serialize};

/// Headline numbers for the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    /// Capital currently tied up, summed over open holdings
    pub total_invested: f64,

    /// Lifetime dividend income across the full history
    pub total_dividend: f64,

    /// Number of open holdings
    pub holding_count: usize,

    /// Ticker with the largest invested capital, if any position is open
    pub top_holding: Option<String>,
}

/// One slice of the allocation breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Instrument ticker
    pub ticker: String,

    /// Capital invested in this instrument
    pub invested: f64,

    /// Share of total invested capital, in percent
    pub weight_pct: f64,
}

/// Concentration label for the largest position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcentrationRisk {
    /// Largest position is at most 30% of invested capital
    Healthy,
    /// Largest position exceeds 30% of invested capital
    Moderate,
}

/// Locally computed portfolio health summary — no market data involved,
/// everything derives from invested capital and the estimate mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Number of open holdings
    pub asset_count: usize,

    /// Capital currently tied up across all holdings
    pub total_invested: f64,

    /// The even-split weight: 100 / asset_count (0 for an empty portfolio)
    pub avg_allocation_pct: f64,

    /// Weight of the largest position, in percent
    pub max_allocation_pct: f64,

    /// Ticker of the largest position
    pub top_holding: Option<String>,

    /// Balance score: 100 − max_allocation_pct + avg_allocation_pct
    pub efficiency_score: f64,

    /// Concentration label for the largest position
    pub concentration: ConcentrationRisk,

    /// Set when the largest position exceeds 40% of invested capital
    pub concentration_warning: bool,

    /// Sum of estimated annual dividend income over all holdings
    pub estimated_annual_income: f64,
}
