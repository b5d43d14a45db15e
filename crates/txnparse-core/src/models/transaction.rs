//! Transaction record produced by the extraction core.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single transaction extracted from raw statement text.
///
/// Created fresh per parse call and owned solely by the caller; the core
/// keeps no copy and no cross-call state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    /// Calendar date of the transaction, fully resolved.
    pub date: NaiveDate,

    /// Merchant or purpose text; never empty on a successful parse.
    pub description: String,

    /// Signed amount: negative for debits, positive for credits.
    pub amount: Decimal,

    /// Running balance after the transaction, when the source text carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,

    /// Extraction certainty in percent (0-100).
    pub confidence: u8,
}
