use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::dividend::Dividend;
use super::transaction::Transaction;

/// The main data container. Everything in here gets serialized, encrypted,
/// and saved to the portable .wtpf file.
///
/// Holdings, yearly aggregates, and analytics are deliberately absent: they
/// are pure functions of these collections and are recomputed on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// All buy/sell trades, kept sorted by date
    pub transactions: Vec<Transaction>,

    /// All dividend receipts, kept sorted by date
    pub dividends: Vec<Dividend>,

    /// User-maintained mapping of ticker → estimated annual dividend per
    /// share. Not derived from history; feeds the projection columns.
    #[serde(default)]
    pub dividend_estimates: HashMap<String, f64>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            dividends: Vec::new(),
            dividend_estimates: HashMap::new(),
        }
    }
}
