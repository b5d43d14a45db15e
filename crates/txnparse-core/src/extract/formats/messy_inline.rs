//! Extractor for free-form single-blob exports.
//!
//! ```text
//! txn123 2025-12-10 Amazon.in Order #403-1234567-8901234 ₹2,999.00 Dr Bal 14171.50 Shopping
//! ```

use crate::extract::rules::patterns::{DATE_ISO_YMD, INLINE_AMOUNT, INLINE_BALANCE};
use crate::extract::rules::{parse_amount, parse_date, signed_by_keyword, FULL_CONFIDENCE};
use crate::extract::FormatExtractor;
use crate::models::ParsedTransaction;

/// Free-form blob with no line structure: an ISO date, a tagged amount
/// token, and an optional `Bal` marker in arbitrary surrounding text.
///
/// The description is whatever sits strictly between the date and the
/// amount, with leading separator punctuation stripped.
pub struct MessyInline;

impl FormatExtractor for MessyInline {
    fn name(&self) -> &'static str {
        "messy_inline"
    }

    fn extract(&self, text: &str) -> Option<ParsedTransaction> {
        let date_match = DATE_ISO_YMD.find(text)?;
        let amount_caps = INLINE_AMOUNT.captures(text)?;
        let amount_match = amount_caps.get(0)?;

        if amount_match.start() <= date_match.end() {
            return None;
        }
        let description = text[date_match.end()..amount_match.start()]
            .trim()
            .trim_start_matches(|c: char| c == '-' || c == ':' || c.is_whitespace())
            .to_string();
        if description.is_empty() {
            return None;
        }

        let date = parse_date(date_match.as_str()).ok()?;

        // The magnitude sits in the glyph arm or in the bare keyword arm
        let magnitude = amount_caps
            .get(1)
            .or_else(|| amount_caps.get(2))
            .map(|m| m.as_str())?;
        let token = amount_match.as_str().to_lowercase();
        let debited = token.contains("dr") || token.contains("debit");
        let amount = signed_by_keyword(parse_amount(magnitude).ok()?, debited);

        let balance = match INLINE_BALANCE.captures(text) {
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
