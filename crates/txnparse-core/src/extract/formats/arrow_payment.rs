//! Extractor for payment-app notification text.
//!
//! ```text
//! Uber Ride * Airport Drop
//! 12/11/2025 → ₹1,250.00 debited
//! Available Balance → ₹17,170.50
//! ```

use crate::extract::rules::patterns::{ARROW_BALANCE, ARROW_DATE_AMOUNT};
use crate::extract::rules::{parse_amount, parse_date, signed_by_keyword, FULL_CONFIDENCE};
use crate::extract::FormatExtractor;
use crate::models::ParsedTransaction;

/// Rigid three-line payment-app layout: a free-text description, then
/// `D/M/YYYY → amount [debited|credited]`, then an optional balance line.
pub struct ArrowPaymentApp;

impl FormatExtractor for ArrowPaymentApp {
    fn name(&self) -> &'static str {
        "arrow_payment_app"
    }

    fn extract(&self, text: &str) -> Option<ParsedTransaction> {
        let mut lines = text.lines().map(str::trim);

        let description = lines.next()?.to_string();
        if description.is_empty() {
            return None;
        }

        let caps = ARROW_DATE_AMOUNT.captures(lines.next()?)?;
        let date = parse_date(&caps[1]).ok()?;
        let debited = caps
            .get(3)
            .is_some_and(|keyword| keyword.as_str().eq_ignore_ascii_case("debited"));
        let amount = signed_by_keyword(parse_amount(&caps[2]).ok()?, debited);

        let balance = match lines.next().and_then(|line| ARROW_BALANCE.captures(line)) {
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
