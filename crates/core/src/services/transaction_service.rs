use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::dividend::Dividend;
use crate::models::portfolio::Portfolio;
use crate::models::transaction::Transaction;

/// Manages the raw event collections: recording, removing, and editing
/// trades and dividend receipts.
///
/// Validation here is structural only (positive quantity, non-negative
/// price and fees). Overselling is deliberately NOT rejected — the
/// aggregation folds clamp it silently, and imported histories may contain
/// sells the importer cannot reconcile.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Record a trade. Keeps the stored log date-sorted via binary insert.
    pub fn add_transaction(
        &self,
        portfolio: &mut Portfolio,
        transaction: Transaction,
    ) -> Result<(), CoreError> {
        self.validate_transaction(&transaction)?;
        let pos = portfolio
            .transactions
            .binary_search_by_key(&transaction.date, |t| t.date)
            .unwrap_or_else(|pos| pos);
        portfolio.transactions.insert(pos, transaction);
        Ok(())
    }

    /// Remove a trade by its ID.
    pub fn remove_transaction(
        &self,
        portfolio: &mut Portfolio,
        transaction_id: Uuid,
    ) -> Result<Transaction, CoreError> {
        let idx = portfolio
            .transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| CoreError::TransactionNotFound(transaction_id.to_string()))?;
        Ok(portfolio.transactions.remove(idx))
    }

    /// Replace a trade's fields in place, keeping its ID and notes.
    /// The updated record is validated before the old one is dropped.
    pub fn update_transaction(
        &self,
        portfolio: &mut Portfolio,
        transaction_id: Uuid,
        updated: Transaction,
    ) -> Result<(), CoreError> {
        self.validate_transaction(&updated)?;

        let idx = portfolio
            .transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| CoreError::TransactionNotFound(transaction_id.to_string()))?;

        let old = portfolio.transactions.remove(idx);
        let replacement = Transaction {
            id: old.id,
            notes: old.notes,
            ..updated
        };

        let pos = portfolio
            .transactions
            .binary_search_by_key(&replacement.date, |t| t.date)
            .unwrap_or_else(|pos| pos);
        portfolio.transactions.insert(pos, replacement);
        Ok(())
    }

    /// Set or clear the notes on an existing trade.
    pub fn set_transaction_notes(
        &self,
        portfolio: &mut Portfolio,
        transaction_id: Uuid,
        notes: Option<String>,
    ) -> Result<(), CoreError> {
        let tx = portfolio
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
            .ok_or_else(|| CoreError::TransactionNotFound(transaction_id.to_string()))?;
        tx.notes = notes;
        Ok(())
    }

    // ── Dividends ───────────────────────────────────────────────────

    /// Record a dividend receipt. Negative amounts pass — broker
    /// corrections are data, not errors.
    pub fn add_dividend(
        &self,
        portfolio: &mut Portfolio,
        dividend: Dividend,
    ) -> Result<(), CoreError> {
        let pos = portfolio
            .dividends
            .binary_search_by_key(&dividend.date, |d| d.date)
            .unwrap_or_else(|pos| pos);
        portfolio.dividends.insert(pos, dividend);
        Ok(())
    }

    /// Remove a dividend receipt by its ID.
    pub fn remove_dividend(
        &self,
        portfolio: &mut Portfolio,
        dividend_id: Uuid,
    ) -> Result<Dividend, CoreError> {
        let idx = portfolio
            .dividends
            .iter()
            .position(|d| d.id == dividend_id)
            .ok_or_else(|| CoreError::DividendNotFound(dividend_id.to_string()))?;
        Ok(portfolio.dividends.remove(idx))
    }

    /// Set or clear the notes on an existing dividend receipt.
    pub fn set_dividend_notes(
        &self,
        portfolio: &mut Portfolio,
        dividend_id: Uuid,
        notes: Option<String>,
    ) -> Result<(), CoreError> {
        let div = portfolio
            .dividends
            .iter_mut()
            .find(|d| d.id == dividend_id)
            .ok_or_else(|| CoreError::DividendNotFound(dividend_id.to_string()))?;
        div.notes = notes;
        Ok(())
    }

    // ── Validation ──────────────────────────────────────────────────

    fn validate_transaction(&self, transaction: &Transaction) -> Result<(), CoreError> {
        if !(transaction.quantity > 0.0) {
            return Err(CoreError::ValidationError(
                "Trade quantity must be positive".into(),
            ));
        }
        if transaction.price < 0.0 {
            return Err(CoreError::ValidationError(
                "Trade price must not be negative".into(),
            ));
        }
        if transaction.fees < 0.0 {
            return Err(CoreError::ValidationError(
                "Trade fees must not be negative".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
