// ═══════════════════════════════════════════════════════════════════
// Performance Ledger Tests — realized gains, fee proration, yearly
// aggregates, cumulative series, report buckets and ratios
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use wealthtrack_core::models::dividend::Dividend;
use wealthtrack_core::models::transaction::{TradeType, Transaction};
use wealthtrack_core::services::performance_service::PerformanceService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn buy(ticker: &str, qty: f64, price: f64, fees: f64, date: NaiveDate) -> Transaction {
    Transaction::new(TradeType::Buy, ticker, ticker, qty, price, fees, date)
}

fn sell(ticker: &str, qty: f64, price: f64, fees: f64, date: NaiveDate) -> Transaction {
    Transaction::new(TradeType::Sell, ticker, ticker, qty, price, fees, date)
}

fn div(ticker: &str, amount: f64, date: NaiveDate) -> Dividend {
    Dividend::new(ticker, ticker, amount, date)
}

#[track_caller]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ═══════════════════════════════════════════════════════════════════
// Realized gains
// ═══════════════════════════════════════════════════════════════════

mod realized_gains {
    use super::*;

    #[test]
    fn gain_against_average_cost_less_fees() {
        // Buy 10 @ 100 fee 5, sell 4 @ 150 fee 2:
        // (150·4 − 2) − (100.5·4) = 598 − 402 = 196
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 100.0, 5.0, d(2023, 1, 1)),
            sell("X", 4.0, 150.0, 2.0, d(2023, 6, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &[]);

        assert_eq!(years.len(), 1);
        assert_eq!(years[0].year, 2023);
        assert_close(years[0].capital_gain, 196.0);
    }

    #[test]
    fn clamped_sell_realizes_only_held_units() {
        // Continue: sell 10 with only 6 held @ 120 fee 0:
        // 120·6 − 100.5·6 = 117; year total 196 + 117 = 313
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 100.0, 5.0, d(2023, 1, 1)),
            sell("X", 4.0, 150.0, 2.0, d(2023, 6, 1)),
            sell("X", 10.0, 120.0, 0.0, d(2023, 9, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &[]);

        assert_close(years[0].capital_gain, 313.0);
    }

    #[test]
    fn fees_prorate_by_executable_fraction_on_clamped_sells() {
        // Hold 5, request 10 @ 20 with fee 4 → only half executes, so only
        // half the fee counts: (20·5 − 2) − (10·5) = 48
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 5.0, 10.0, 0.0, d(2023, 1, 1)),
            sell("X", 10.0, 20.0, 4.0, d(2023, 2, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &[]);

        assert_close(years[0].capital_gain, 48.0);
    }

    #[test]
    fn unclamped_sell_pays_the_full_fee() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 10.0, 0.0, d(2023, 1, 1)),
            sell("X", 10.0, 20.0, 4.0, d(2023, 2, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &[]);

        // (20·10 − 4) − (10·10) = 96
        assert_close(years[0].capital_gain, 96.0);
    }

    #[test]
    fn average_price_survives_sequential_sells() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 10.0, 0.0, d(2023, 1, 1)),
            sell("X", 5.0, 20.0, 0.0, d(2023, 2, 1)),
            sell("X", 5.0, 30.0, 0.0, d(2023, 3, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &[]);

        // First sell gains 50, second gains 100 against the same avg of 10
        assert_close(years[0].capital_gain, 150.0);
    }

    #[test]
    fn buys_recognize_no_gain() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 10.0, 2.0, d(2023, 1, 1)),
            buy("X", 10.0, 20.0, 2.0, d(2023, 2, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &[]);

        assert_close(years[0].capital_gain, 0.0);
    }

    #[test]
    fn sell_of_never_bought_ticker_contributes_nothing() {
        let service = PerformanceService::new();
        let txs = vec![sell("Z", 5.0, 10.0, 1.0, d(2023, 1, 1))];
        let years = service.yearly_aggregates(&txs, &[]);

        // The year still appears, with zero totals
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].year, 2023);
        assert_close(years[0].capital_gain, 0.0);
        assert_close(years[0].dividend, 0.0);
    }

    #[test]
    fn gain_lands_in_the_sell_year_not_the_buy_year() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 100.0, 0.0, d(2020, 5, 1)),
            sell("X", 10.0, 150.0, 0.0, d(2022, 5, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &[]);

        assert_eq!(years.len(), 2);
        assert_eq!(years[0].year, 2020);
        assert_close(years[0].capital_gain, 0.0);
        assert_eq!(years[1].year, 2022);
        assert_close(years[1].capital_gain, 500.0);
    }

    #[test]
    fn same_day_buy_is_visible_to_a_same_day_sell() {
        // Sell listed first on the same date; the buy must fold first
        let service = PerformanceService::new();
        let txs = vec![
            sell("X", 5.0, 12.0, 0.0, d(2023, 3, 15)),
            buy("X", 5.0, 10.0, 0.0, d(2023, 3, 15)),
        ];
        let years = service.yearly_aggregates(&txs, &[]);

        assert_close(years[0].capital_gain, 10.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Dividends & year seeding
// ═══════════════════════════════════════════════════════════════════

mod dividends {
    use super::*;

    #[test]
    fn dividend_counts_without_any_transactions() {
        // A dividend with no trade history still lands in its year
        let service = PerformanceService::new();
        let divs = vec![div("Y", 50.0, d(2022, 3, 1))];
        let years = service.yearly_aggregates(&[], &divs);

        assert_eq!(years.len(), 1);
        assert_eq!(years[0].year, 2022);
        assert_close(years[0].dividend, 50.0);
        assert_close(years[0].capital_gain, 0.0);
    }

    #[test]
    fn negative_correction_reduces_the_year_total() {
        let service = PerformanceService::new();
        let divs = vec![
            div("Y", 50.0, d(2022, 3, 1)),
            div("Y", -20.0, d(2022, 9, 1)),
        ];
        let years = service.yearly_aggregates(&[], &divs);

        assert_close(years[0].dividend, 30.0);
    }

    #[test]
    fn years_come_from_both_collections() {
        let service = PerformanceService::new();
        let txs = vec![buy("X", 1.0, 10.0, 0.0, d(2021, 1, 1))];
        let divs = vec![div("Y", 10.0, d(2023, 1, 1))];
        let years = service.yearly_aggregates(&txs, &divs);

        let labels: Vec<i32> = years.iter().map(|y| y.year).collect();
        assert_eq!(labels, vec![2021, 2023]);
        assert_close(years[0].dividend, 0.0);
        assert_close(years[1].dividend, 10.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Cumulative series
// ═══════════════════════════════════════════════════════════════════

mod cumulative {
    use super::*;

    #[test]
    fn running_total_accumulates_in_ascending_year_order() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 10.0, 0.0, d(2021, 1, 1)),
            sell("X", 5.0, 20.0, 0.0, d(2022, 1, 1)),
        ];
        let divs = vec![
            div("X", 30.0, d(2021, 6, 1)),
            div("X", 40.0, d(2023, 6, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &divs);

        assert_eq!(years.len(), 3);
        assert_close(years[0].cumulative_profit, 30.0); // 2021: div 30
        assert_close(years[1].cumulative_profit, 80.0); // 2022: gain 50
        assert_close(years[2].cumulative_profit, 120.0); // 2023: div 40
    }

    #[test]
    fn final_cumulative_equals_sum_of_all_years() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("A", 10.0, 10.0, 1.0, d(2020, 1, 1)),
            sell("A", 10.0, 15.0, 1.0, d(2021, 1, 1)),
            buy("B", 5.0, 100.0, 0.0, d(2022, 1, 1)),
            sell("B", 2.0, 90.0, 0.5, d(2023, 1, 1)),
        ];
        let divs = vec![
            div("A", 12.0, d(2020, 6, 1)),
            div("B", -3.0, d(2023, 6, 1)),
        ];
        let years = service.yearly_aggregates(&txs, &divs);

        let total: f64 = years.iter().map(|y| y.dividend + y.capital_gain).sum();
        assert_close(years.last().unwrap().cumulative_profit, total);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Report buckets & ratios
// ═══════════════════════════════════════════════════════════════════

mod report {
    use super::*;

    #[test]
    fn current_and_previous_year_buckets() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 10.0, 0.0, d(2023, 1, 1)),
            sell("X", 5.0, 20.0, 0.0, d(2024, 2, 1)),
        ];
        let divs = vec![
            div("X", 100.0, d(2023, 6, 1)),
            div("X", 150.0, d(2024, 6, 1)),
        ];
        let report = service.report(&txs, &divs, d(2024, 7, 10));

        assert_eq!(report.current_year, 2024);
        assert_eq!(report.previous_year, 2023);
        assert_close(report.current_year_totals.dividend, 150.0);
        assert_close(report.current_year_totals.capital_gain, 50.0);
        assert_close(report.previous_year_totals.dividend, 100.0);
        assert_close(report.previous_year_totals.capital_gain, 0.0);
    }

    #[test]
    fn absent_years_default_to_zero_totals() {
        let service = PerformanceService::new();
        let divs = vec![div("X", 75.0, d(2020, 6, 1))];
        let report = service.report(&[], &divs, d(2024, 7, 10));

        assert_close(report.current_year_totals.dividend, 0.0);
        assert_close(report.previous_year_totals.dividend, 0.0);
        assert_close(report.lifetime_totals.dividend, 75.0);
    }

    #[test]
    fn lifetime_totals_span_the_full_history() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 10.0, 0.0, d(2020, 1, 1)),
            sell("X", 10.0, 12.0, 0.0, d(2021, 1, 1)),
        ];
        let divs = vec![
            div("X", 5.0, d(2020, 6, 1)),
            div("X", 7.0, d(2022, 6, 1)),
        ];
        let report = service.report(&txs, &divs, d(2024, 3, 1));

        assert_close(report.lifetime_totals.capital_gain, 20.0);
        assert_close(report.lifetime_totals.dividend, 12.0);
    }

    #[test]
    fn dividend_growth_compares_current_to_previous() {
        let service = PerformanceService::new();
        let divs = vec![
            div("X", 100.0, d(2023, 6, 1)),
            div("X", 150.0, d(2024, 6, 1)),
        ];
        let report = service.report(&[], &divs, d(2024, 12, 1));

        assert_close(report.dividend_growth_pct, 50.0);
    }

    #[test]
    fn dividend_growth_falls_back_to_zero_without_a_prior_year() {
        let service = PerformanceService::new();
        let divs = vec![div("X", 150.0, d(2024, 6, 1))];
        let report = service.report(&[], &divs, d(2024, 12, 1));

        assert_close(report.dividend_growth_pct, 0.0);
    }

    #[test]
    fn monthly_average_divides_by_elapsed_months() {
        let service = PerformanceService::new();
        let txs = vec![
            buy("X", 10.0, 10.0, 0.0, d(2024, 1, 5)),
            sell("X", 10.0, 13.0, 0.0, d(2024, 2, 5)),
        ];
        let divs = vec![div("X", 30.0, d(2024, 3, 1))];
        // June → 6 months elapsed; (30 + 30) / 6 = 10
        let report = service.report(&txs, &divs, d(2024, 6, 15));

        assert_close(report.monthly_average, 10.0);
    }

    #[test]
    fn january_average_divides_by_one() {
        let service = PerformanceService::new();
        let divs = vec![div("X", 42.0, d(2024, 1, 10))];
        let report = service.report(&[], &divs, d(2024, 1, 20));

        assert_close(report.monthly_average, 42.0);
    }

    #[test]
    fn empty_history_produces_an_empty_report() {
        let service = PerformanceService::new();
        let report = service.report(&[], &[], d(2024, 5, 1));

        assert!(report.yearly.is_empty());
        assert_close(report.lifetime_totals.dividend, 0.0);
        assert_close(report.lifetime_totals.capital_gain, 0.0);
        assert_close(report.dividend_growth_pct, 0.0);
        assert_close(report.monthly_average, 0.0);
    }
}
