use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dividend receipt for an instrument.
///
/// `amount` is the total cash received, not a per-share rate. Negative
/// amounts are accepted — brokers issue corrections as negative entries,
/// and the ledger treats them as ordinary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    /// Unique identifier
    pub id: Uuid,

    /// Payment date
    pub date: NaiveDate,

    /// Instrument ticker, uppercased
    pub ticker: String,

    /// Display name for the instrument
    pub name: String,

    /// Cash amount received (may be negative for corrections)
    pub amount: f64,

    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Dividend {
    pub fn new(
        ticker: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            ticker: ticker.into().to_uppercase(),
            name: name.into(),
            amount,
            notes: None,
        }
    }

    /// Create a dividend with notes attached.
    pub fn with_notes(
        ticker: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        notes: impl Into<String>,
    ) -> Self {
        let mut div = Self::new(ticker, name, amount, date);
        div.notes = Some(notes.into());
        div
    }
}
