pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use uuid::Uuid;

use errors::CoreError;
use models::{
    analytics::{AllocationSlice, HealthReport, PortfolioStats},
    dividend::Dividend,
    holding::Holding,
    performance::{PerformanceReport, YearlyAggregate},
    portfolio::Portfolio,
    transaction::{TradeType, Transaction, TransactionSortOrder},
};
use services::{
    analytics_service::AnalyticsService, holdings_service::HoldingsService,
    performance_service::PerformanceService, transaction_service::TransactionService,
};
use storage::manager::PortfolioStore;

/// Main entry point for the WealthTrack core library.
/// Owns the raw event collections and the services that derive everything
/// else from them.
#[must_use]
pub struct WealthTracker {
    portfolio: Portfolio,
    transaction_service: TransactionService,
    holdings_service: HoldingsService,
    performance_service: PerformanceService,
    analytics_service: AnalyticsService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for WealthTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WealthTracker")
            .field("transactions", &self.portfolio.transactions.len())
            .field("dividends", &self.portfolio.dividends.len())
            .field("estimates", &self.portfolio.dividend_estimates.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl WealthTracker {
    /// Create a brand new empty portfolio.
    pub fn create_new() -> Self {
        Self::build(Portfolio::default())
    }

    /// Load an existing portfolio from encrypted bytes (password required).
    /// Use this for WASM hosts where the frontend handles file I/O.
    pub fn load_from_bytes(encrypted: &[u8], password: &str) -> Result<Self, CoreError> {
        let portfolio = PortfolioStore::load_from_bytes(encrypted, password)?;
        Ok(Self::build(portfolio))
    }

    /// Save the current portfolio to encrypted bytes for the frontend to
    /// store. Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self, password: &str) -> Result<Vec<u8>, CoreError> {
        let bytes = PortfolioStore::save_to_bytes(&self.portfolio, password)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from an encrypted file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, password: &str) -> Result<Self, CoreError> {
        let portfolio = PortfolioStore::load_from_file(path, password)?;
        Ok(Self::build(portfolio))
    }

    /// Save to an encrypted file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str, password: &str) -> Result<(), CoreError> {
        PortfolioStore::save_to_file(&self.portfolio, path, password)?;
        self.dirty = false;
        Ok(())
    }

    // ── Trade Management ────────────────────────────────────────────

    /// Record a buy/sell trade.
    #[allow(clippy::too_many_arguments)]
    pub fn add_transaction(
        &mut self,
        trade_type: TradeType,
        ticker: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        price: f64,
        fees: f64,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        let tx = Transaction::new(trade_type, ticker, name, quantity, price, fees, date);
        let id = tx.id;
        self.transaction_service
            .add_transaction(&mut self.portfolio, tx)?;
        self.dirty = true;
        Ok(id)
    }

    /// Record a buy/sell trade with notes attached.
    #[allow(clippy::too_many_arguments)]
    pub fn add_transaction_with_notes(
        &mut self,
        trade_type: TradeType,
        ticker: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        price: f64,
        fees: f64,
        date: NaiveDate,
        notes: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        let tx =
            Transaction::with_notes(trade_type, ticker, name, quantity, price, fees, date, notes);
        let id = tx.id;
        self.transaction_service
            .add_transaction(&mut self.portfolio, tx)?;
        self.dirty = true;
        Ok(id)
    }

    /// Add multiple trades at once. All are validated first; if any fails
    /// validation, none are added. Returns the IDs of all added trades.
    pub fn add_transactions(
        &mut self,
        transactions: Vec<Transaction>,
    ) -> Result<Vec<Uuid>, CoreError> {
        let mut staged = self.portfolio.clone();
        let mut ids = Vec::with_capacity(transactions.len());

        for tx in transactions {
            ids.push(tx.id);
            self.transaction_service.add_transaction(&mut staged, tx)?;
        }

        self.portfolio = staged;
        self.dirty = true;
        Ok(ids)
    }

    /// Remove a trade by its ID.
    pub fn remove_transaction(&mut self, transaction_id: Uuid) -> Result<(), CoreError> {
        self.transaction_service
            .remove_transaction(&mut self.portfolio, transaction_id)?;
        self.dirty = true;
        Ok(())
    }

    /// Replace an existing trade's fields (ID and notes are kept).
    #[allow(clippy::too_many_arguments)]
    pub fn update_transaction(
        &mut self,
        transaction_id: Uuid,
        trade_type: TradeType,
        ticker: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        price: f64,
        fees: f64,
        date: NaiveDate,
    ) -> Result<(), CoreError> {
        let updated = Transaction::new(trade_type, ticker, name, quantity, price, fees, date);
        self.transaction_service
            .update_transaction(&mut self.portfolio, transaction_id, updated)?;
        self.dirty = true;
        Ok(())
    }

    /// Set or clear notes on an existing trade.
    pub fn set_transaction_notes(
        &mut self,
        transaction_id: Uuid,
        notes: Option<String>,
    ) -> Result<(), CoreError> {
        self.transaction_service
            .set_transaction_notes(&mut self.portfolio, transaction_id, notes)?;
        self.dirty = true;
        Ok(())
    }

    // ── Dividend Management ─────────────────────────────────────────

    /// Record a dividend receipt. Negative amounts are accepted (broker
    /// corrections).
    pub fn add_dividend(
        &mut self,
        ticker: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        let div = Dividend::new(ticker, name, amount, date);
        let id = div.id;
        self.transaction_service
            .add_dividend(&mut self.portfolio, div)?;
        self.dirty = true;
        Ok(id)
    }

    /// Record a dividend receipt with notes attached.
    pub fn add_dividend_with_notes(
        &mut self,
        ticker: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        notes: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        let div = Dividend::with_notes(ticker, name, amount, date, notes);
        let id = div.id;
        self.transaction_service
            .add_dividend(&mut self.portfolio, div)?;
        self.dirty = true;
        Ok(id)
    }

    /// Add multiple dividend receipts at once.
    pub fn add_dividends(&mut self, dividends: Vec<Dividend>) -> Result<Vec<Uuid>, CoreError> {
        let mut ids = Vec::with_capacity(dividends.len());
        for div in dividends {
            ids.push(div.id);
            self.transaction_service
                .add_dividend(&mut self.portfolio, div)?;
        }
        self.dirty = true;
        Ok(ids)
    }

    /// Remove a dividend receipt by its ID.
    pub fn remove_dividend(&mut self, dividend_id: Uuid) -> Result<(), CoreError> {
        self.transaction_service
            .remove_dividend(&mut self.portfolio, dividend_id)?;
        self.dirty = true;
        Ok(())
    }

    /// Set or clear notes on an existing dividend receipt.
    pub fn set_dividend_notes(
        &mut self,
        dividend_id: Uuid,
        notes: Option<String>,
    ) -> Result<(), CoreError> {
        self.transaction_service
            .set_dividend_notes(&mut self.portfolio, dividend_id, notes)?;
        self.dirty = true;
        Ok(())
    }

    // ── Dividend Estimates ──────────────────────────────────────────

    /// Set the estimated annual dividend per share for a ticker.
    /// Feeds the projection columns on holdings; history is untouched.
    pub fn set_dividend_estimate(&mut self, ticker: impl Into<String>, rate: f64) {
        self.portfolio
            .dividend_estimates
            .insert(ticker.into().to_uppercase(), rate);
        self.dirty = true;
    }

    /// Remove the estimate for a ticker. Returns whether one existed.
    pub fn remove_dividend_estimate(&mut self, ticker: &str) -> bool {
        let removed = self
            .portfolio
            .dividend_estimates
            .remove(&ticker.to_uppercase())
            .is_some();
        if removed {
            self.dirty = true;
        }
        removed
    }

    /// The estimated annual dividend per share for a ticker (0 when unset).
    #[must_use]
    pub fn dividend_estimate(&self, ticker: &str) -> f64 {
        self.portfolio
            .dividend_estimates
            .get(&ticker.to_uppercase())
            .copied()
            .unwrap_or(0.0)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Get a single trade by its ID.
    #[must_use]
    pub fn get_transaction(&self, transaction_id: Uuid) -> Option<&Transaction> {
        self.portfolio
            .transactions
            .iter()
            .find(|t| t.id == transaction_id)
    }

    /// All trades, newest first.
    #[must_use]
    pub fn get_transactions(&self) -> Vec<&Transaction> {
        let mut txs: Vec<&Transaction> = self.portfolio.transactions.iter().collect();
        txs.reverse(); // internal storage is oldest-first
        txs
    }

    /// Trades for one ticker (case-insensitive), newest first.
    #[must_use]
    pub fn get_transactions_for_ticker(&self, ticker: &str) -> Vec<&Transaction> {
        let upper = ticker.to_uppercase();
        let mut txs: Vec<&Transaction> = self
            .portfolio
            .transactions
            .iter()
            .filter(|t| t.ticker == upper)
            .collect();
        txs.reverse();
        txs
    }

    /// Trades of one type (buys or sells), newest first.
    #[must_use]
    pub fn get_transactions_by_type(&self, trade_type: TradeType) -> Vec<&Transaction> {
        let mut txs: Vec<&Transaction> = self
            .portfolio
            .transactions
            .iter()
            .filter(|t| t.trade_type == trade_type)
            .collect();
        txs.reverse();
        txs
    }

    /// Trades within a date range (inclusive), newest first.
    #[must_use]
    pub fn get_transactions_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Transaction> {
        let mut txs: Vec<&Transaction> = self
            .portfolio
            .transactions
            .iter()
            .filter(|t| t.date >= from && t.date <= to)
            .collect();
        txs.reverse();
        txs
    }

    /// Trades sorted by an explicit order.
    #[must_use]
    pub fn get_transactions_sorted(&self, order: &TransactionSortOrder) -> Vec<&Transaction> {
        let mut txs: Vec<&Transaction> = self.portfolio.transactions.iter().collect();
        match order {
            TransactionSortOrder::DateDesc => txs.sort_by(|a, b| b.date.cmp(&a.date)),
            TransactionSortOrder::DateAsc => txs.sort_by(|a, b| a.date.cmp(&b.date)),
            TransactionSortOrder::TickerAsc => txs.sort_by(|a, b| a.ticker.cmp(&b.ticker)),
            TransactionSortOrder::TickerDesc => txs.sort_by(|a, b| b.ticker.cmp(&a.ticker)),
            TransactionSortOrder::ValueDesc => txs.sort_by(|a, b| {
                b.gross_value()
                    .partial_cmp(&a.gross_value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TransactionSortOrder::ValueAsc => txs.sort_by(|a, b| {
                a.gross_value()
                    .partial_cmp(&b.gross_value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
        txs
    }

    /// Search trades by ticker, name, or notes (case-insensitive).
    #[must_use]
    pub fn search_transactions(&self, query: &str) -> Vec<&Transaction> {
        let q = query.to_lowercase();
        self.portfolio
            .transactions
            .iter()
            .filter(|t| {
                t.ticker.to_lowercase().contains(&q)
                    || t.name.to_lowercase().contains(&q)
                    || t.notes.as_deref().unwrap_or("").to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Total number of recorded trades.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.portfolio.transactions.len()
    }

    /// Get a single dividend receipt by its ID.
    #[must_use]
    pub fn get_dividend(&self, dividend_id: Uuid) -> Option<&Dividend> {
        self.portfolio.dividends.iter().find(|d| d.id == dividend_id)
    }

    /// All dividend receipts, newest first.
    #[must_use]
    pub fn get_dividends(&self) -> Vec<&Dividend> {
        let mut divs: Vec<&Dividend> = self.portfolio.dividends.iter().collect();
        divs.reverse();
        divs
    }

    /// Dividend receipts for one ticker (case-insensitive), newest first.
    #[must_use]
    pub fn get_dividends_for_ticker(&self, ticker: &str) -> Vec<&Dividend> {
        let upper = ticker.to_uppercase();
        let mut divs: Vec<&Dividend> = self
            .portfolio
            .dividends
            .iter()
            .filter(|d| d.ticker == upper)
            .collect();
        divs.reverse();
        divs
    }

    /// Total number of recorded dividend receipts.
    #[must_use]
    pub fn dividend_count(&self) -> usize {
        self.portfolio.dividends.len()
    }

    /// Date of the earliest trade or dividend, if any.
    #[must_use]
    pub fn earliest_activity_date(&self) -> Option<NaiveDate> {
        let tx = self.portfolio.transactions.first().map(|t| t.date);
        let div = self.portfolio.dividends.first().map(|d| d.date);
        match (tx, div) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Date of the most recent trade or dividend, if any.
    #[must_use]
    pub fn latest_activity_date(&self) -> Option<NaiveDate> {
        let tx = self.portfolio.transactions.last().map(|t| t.date);
        let div = self.portfolio.dividends.last().map(|d| d.date);
        match (tx, div) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    // ── Derived Views ───────────────────────────────────────────────

    /// Current holdings with weighted-average cost and dividend
    /// projections. Recomputed from the full log on every call.
    #[must_use]
    pub fn holdings(&self) -> Vec<Holding> {
        self.holdings_service
            .compute(&self.portfolio.transactions, &self.portfolio.dividend_estimates)
    }

    /// Performance report as of today (wall clock).
    #[must_use]
    pub fn performance_report(&self) -> PerformanceReport {
        self.performance_report_at(chrono::Utc::now().date_naive())
    }

    /// Performance report as of an explicit date — deterministic variant
    /// for tests and replays.
    #[must_use]
    pub fn performance_report_at(&self, today: NaiveDate) -> PerformanceReport {
        self.performance_service
            .report(&self.portfolio.transactions, &self.portfolio.dividends, today)
    }

    /// Per-year dividend and realized-gain aggregates, ascending, with
    /// cumulative running totals.
    #[must_use]
    pub fn yearly_aggregates(&self) -> Vec<YearlyAggregate> {
        self.performance_service
            .yearly_aggregates(&self.portfolio.transactions, &self.portfolio.dividends)
    }

    /// Headline stats: invested capital, lifetime dividends, holding count,
    /// top holding.
    #[must_use]
    pub fn portfolio_stats(&self) -> PortfolioStats {
        self.analytics_service.portfolio_stats(&self.portfolio)
    }

    /// Allocation breakdown over current holdings, largest first.
    #[must_use]
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        self.analytics_service.allocation(&self.holdings())
    }

    /// Concentration and balance summary over current holdings.
    #[must_use]
    pub fn health_report(&self) -> HealthReport {
        self.analytics_service.health_report(&self.holdings())
    }

    // ── Password & Dirty State ──────────────────────────────────────

    /// Re-encrypt the portfolio with a new password and return the bytes.
    ///
    /// `last_saved_bytes` must be the most recently saved container for
    /// this portfolio; the current password is verified by decrypting it.
    pub fn change_password(
        &mut self,
        last_saved_bytes: &[u8],
        current_password: &str,
        new_password: &str,
    ) -> Result<Vec<u8>, CoreError> {
        // Proves the caller knows the old password before re-keying.
        PortfolioStore::load_from_bytes(last_saved_bytes, current_password)?;

        let new_bytes = PortfolioStore::save_to_bytes(&self.portfolio, new_password)?;
        self.dirty = false;
        Ok(new_bytes)
    }

    /// Returns `true` if the portfolio changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Wipe all trades, dividends, and estimates.
    pub fn reset_all(&mut self) {
        self.portfolio = Portfolio::default();
        self.dirty = true;
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all trades as CSV.
    /// Columns: id,date,ticker,name,type,quantity,price,fees
    #[must_use]
    pub fn export_transactions_to_csv(&self) -> String {
        let mut csv = String::from("id,date,ticker,name,type,quantity,price,fees\n");
        for tx in &self.portfolio.transactions {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                tx.id,
                tx.date,
                tx.ticker,
                escape_csv_field(&tx.name),
                tx.trade_type,
                tx.quantity,
                tx.price,
                tx.fees,
            ));
        }
        csv
    }

    /// Export all dividend receipts as CSV.
    /// Columns: id,date,ticker,name,amount
    #[must_use]
    pub fn export_dividends_to_csv(&self) -> String {
        let mut csv = String::from("id,date,ticker,name,amount\n");
        for div in &self.portfolio.dividends {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                div.id,
                div.date,
                div.ticker,
                escape_csv_field(&div.name),
                div.amount,
            ));
        }
        csv
    }

    /// Import trades from CSV (same columns the export writes; the first
    /// line is treated as a header and skipped). Rows append to the
    /// existing log; a missing or unparseable id gets a fresh one, a
    /// missing fees column defaults to 0. Returns the number imported.
    pub fn import_transactions_from_csv(&mut self, csv: &str) -> Result<usize, CoreError> {
        let mut imported = Vec::new();

        for (line_no, line) in csv.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_csv_line(line);
            if fields.len() < 7 {
                return Err(CoreError::CsvImport(format!(
                    "line {}: expected at least 7 columns, found {}",
                    line_no + 1,
                    fields.len()
                )));
            }

            let date = parse_csv_date(&fields[1], line_no)?;
            let trade_type: TradeType = fields[4]
                .parse()
                .map_err(|e| CoreError::CsvImport(format!("line {}: {e}", line_no + 1)))?;
            let quantity = parse_csv_number(&fields[5], "quantity", line_no)?;
            let price = parse_csv_number(&fields[6], "price", line_no)?;
            let fees = match fields.get(7) {
                Some(f) if !f.trim().is_empty() => parse_csv_number(f, "fees", line_no)?,
                _ => 0.0,
            };

            let mut tx = Transaction::new(
                trade_type,
                fields[2].trim(),
                fields[3].trim(),
                quantity,
                price,
                fees,
                date,
            );
            if let Ok(id) = Uuid::parse_str(fields[0].trim()) {
                tx.id = id;
            }
            imported.push(tx);
        }

        let count = imported.len();
        self.add_transactions(imported)?;
        Ok(count)
    }

    /// Import dividend receipts from CSV (export columns, header skipped).
    /// Returns the number imported.
    pub fn import_dividends_from_csv(&mut self, csv: &str) -> Result<usize, CoreError> {
        let mut imported = Vec::new();

        for (line_no, line) in csv.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_csv_line(line);
            if fields.len() < 5 {
                return Err(CoreError::CsvImport(format!(
                    "line {}: expected at least 5 columns, found {}",
                    line_no + 1,
                    fields.len()
                )));
            }

            let date = parse_csv_date(&fields[1], line_no)?;
            let amount = parse_csv_number(&fields[4], "amount", line_no)?;

            let mut div = Dividend::new(fields[2].trim(), fields[3].trim(), amount, date);
            if let Ok(id) = Uuid::parse_str(fields[0].trim()) {
                div.id = id;
            }
            imported.push(div);
        }

        let count = imported.len();
        self.add_dividends(imported)?;
        Ok(count)
    }

    /// Export all trades as a JSON array.
    pub fn export_transactions_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.portfolio.transactions)
            .map_err(|e| CoreError::Serialization(format!("Trade export failed: {e}")))
    }

    /// Import trades from a JSON array. Returns the number imported.
    pub fn import_transactions_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let transactions: Vec<Transaction> = serde_json::from_str(json)?;
        let count = transactions.len();
        self.add_transactions(transactions)?;
        Ok(count)
    }

    /// Export all dividend receipts as a JSON array.
    pub fn export_dividends_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.portfolio.dividends)
            .map_err(|e| CoreError::Serialization(format!("Dividend export failed: {e}")))
    }

    /// Import dividend receipts from a JSON array. Returns the number
    /// imported.
    pub fn import_dividends_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let dividends: Vec<Dividend> = serde_json::from_str(json)?;
        let count = dividends.len();
        self.add_dividends(dividends)?;
        Ok(count)
    }

    /// Export the full portfolio as pretty JSON (unencrypted snapshot for
    /// debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.portfolio)
            .map_err(|e| CoreError::Serialization(format!("Portfolio export failed: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            transaction_service: TransactionService::new(),
            holdings_service: HoldingsService::new(),
            performance_service: PerformanceService::new(),
            analytics_service: AnalyticsService::new(),
            dirty: false,
        }
    }
}

// ── CSV helpers ─────────────────────────────────────────────────────

/// Quote a field when it contains a comma, quote, or newline; embedded
/// quotes double per RFC 4180.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split one CSV line into fields, honoring the quoting `escape_csv_field`
/// produces. Not a general CSV reader — just the inverse of our writer.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_csv_date(field: &str, line_no: usize) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(field.trim(), "%Y-%m-%d").map_err(|_| {
        CoreError::CsvImport(format!(
            "line {}: invalid date '{}' (expected YYYY-MM-DD)",
            line_no + 1,
            field.trim()
        ))
    })
}

fn parse_csv_number(field: &str, column: &str, line_no: usize) -> Result<f64, CoreError> {
    field.trim().parse::<f64>().map_err(|_| {
        CoreError::CsvImport(format!(
            "line {}: invalid {column} '{}'",
            line_no + 1,
            field.trim()
        ))
    })
}
