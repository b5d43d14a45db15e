//! Extractor for explicitly labeled multi-line statement text.
//!
//! ```text
//! Date: 11 Dec 2025
//! Description: STARBUCKS COFFEE MUMBAI
//! Amount: -420.00
//! Balance after transaction: 18,420.50
//! ```

use crate::extract::rules::patterns::{
    LABELED_AMOUNT, LABELED_BALANCE, LABELED_DATE, LABELED_DESCRIPTION,
};
use crate::extract::rules::{parse_amount, parse_date, FULL_CONFIDENCE};
use crate::extract::FormatExtractor;
use crate::models::ParsedTransaction;

/// Labeled `Date:`/`Description:`/`Amount:` statement format.
///
/// Markers are matched case-insensitively and located independently, so
/// their order in the text is irrelevant. The balance marker (any label
/// containing "Balance" and ending in a colon) is optional.
pub struct StandardLabeled;

impl FormatExtractor for StandardLabeled {
    fn name(&self) -> &'static str {
        "standard_labeled"
    }

    fn extract(&self, text: &str) -> Option<ParsedTransaction> {
        let date_caps = LABELED_DATE.captures(text)?;
        let desc_caps = LABELED_DESCRIPTION.captures(text)?;
        let amount_caps = LABELED_AMOUNT.captures(text)?;

        let date = parse_date(&date_caps[1]).ok()?;
        let description = desc_caps[1].trim().to_string();
        if description.is_empty() {
            return None;
        }
        // Sign comes straight from the matched token; this format has no
        // debit/credit keyword
        let amount = parse_amount(&amount_caps[1]).ok()?;
        let balance = match LABELED_BALANCE.captures(text) {
            Some(caps) => Some(parse_amount(&caps[1]).ok()?),
            None => None,
        };

        Some(ParsedTransaction {
            date,
            description,
            amount,
            balance,
            confidence: FULL_CONFIDENCE,
        })
    }
}
