use crate::models::analytics::{
    AllocationSlice, ConcentrationRisk, HealthReport, PortfolioStats,
};
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;
use crate::services::holdings_service::HoldingsService;

/// Largest-position weight above which the portfolio is labeled Moderate.
const CONCENTRATION_MODERATE_PCT: f64 = 30.0;

/// Largest-position weight above which the diversification warning fires.
const CONCENTRATION_WARNING_PCT: f64 = 40.0;

/// Locally computed portfolio analytics: headline stats, allocation
/// breakdown, and the health report. No market data involved — everything
/// derives from invested capital and the dividend estimate mapping.
pub struct AnalyticsService {
    holdings_service: HoldingsService,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self {
            holdings_service: HoldingsService::new(),
        }
    }

    /// Headline numbers: invested capital, lifetime dividend income,
    /// holding count, and the largest position.
    #[must_use]
    pub fn portfolio_stats(&self, portfolio: &Portfolio) -> PortfolioStats {
        let holdings = self
            .holdings_service
            .compute(&portfolio.transactions, &portfolio.dividend_estimates);

        let total_invested: f64 = holdings.iter().map(|h| h.total_invested).sum();
        let total_dividend: f64 = portfolio.dividends.iter().map(|d| d.amount).sum();

        PortfolioStats {
            total_invested,
            total_dividend,
            holding_count: holdings.len(),
            top_holding: Self::top_holding(&holdings).map(|h| h.ticker.clone()),
        }
    }

    /// Per-ticker invested capital and weight percent, largest first.
    /// Weights are 0 when nothing is invested.
    #[must_use]
    pub fn allocation(&self, holdings: &[Holding]) -> Vec<AllocationSlice> {
        let total: f64 = holdings.iter().map(|h| h.total_invested).sum();

        let mut slices: Vec<AllocationSlice> = holdings
            .iter()
            .map(|h| AllocationSlice {
                ticker: h.ticker.clone(),
                invested: h.total_invested,
                weight_pct: if total > 0.0 {
                    h.total_invested / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        slices.sort_by(|a, b| {
            b.invested
                .partial_cmp(&a.invested)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        slices
    }

    /// Concentration and balance summary over the current holdings.
    #[must_use]
    pub fn health_report(&self, holdings: &[Holding]) -> HealthReport {
        let asset_count = holdings.len();
        let total_invested: f64 = holdings.iter().map(|h| h.total_invested).sum();

        let avg_allocation_pct = if asset_count > 0 {
            100.0 / asset_count as f64
        } else {
            0.0
        };

        let top = Self::top_holding(holdings);
        let max_allocation_pct = match top {
            Some(h) if total_invested > 0.0 => h.total_invested / total_invested * 100.0,
            _ => 0.0,
        };

        let concentration = if max_allocation_pct > CONCENTRATION_MODERATE_PCT {
            ConcentrationRisk::Moderate
        } else {
            ConcentrationRisk::Healthy
        };

        let estimated_annual_income: f64 =
            holdings.iter().map(|h| h.estimated_total_dividend).sum();

        HealthReport {
            asset_count,
            total_invested,
            avg_allocation_pct,
            max_allocation_pct,
            top_holding: top.map(|h| h.ticker.clone()),
            efficiency_score: 100.0 - max_allocation_pct + avg_allocation_pct,
            concentration,
            concentration_warning: max_allocation_pct > CONCENTRATION_WARNING_PCT,
            estimated_annual_income,
        }
    }

    fn top_holding(holdings: &[Holding]) -> Option<&Holding> {
        holdings.iter().max_by(|a, b| {
            a.total_invested
                .partial_cmp(&b.total_invested)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
