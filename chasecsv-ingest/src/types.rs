use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated monetary movement parsed from statement text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Decimal string exactly as matched: thousands separators kept,
    /// '-' prefix for debits, no prefix for credits.
    pub amount: String,
}
