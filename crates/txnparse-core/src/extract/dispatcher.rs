//! Ordered-fallback dispatch across the known transaction formats.

use tracing::{debug, info};

use crate::error::{ParseError, Result};
use crate::models::ParsedTransaction;

use super::formats::{ArrowPaymentApp, MessyInline, StandardLabeled};
use super::FormatExtractor;

/// Extractors in fixed priority order; the first match wins.
static EXTRACTORS: [&dyn FormatExtractor; 3] = [&StandardLabeled, &ArrowPaymentApp, &MessyInline];

/// Parse raw transaction text into a structured record.
///
/// Trims the input, then tries each known format in priority order and
/// returns the first successful extraction. Per-format failures (missing
/// markers, malformed dates or amounts) are swallowed; only the aggregate
/// "nothing matched" outcome surfaces as an error.
pub fn parse_transaction(raw_text: &str) -> Result<ParsedTransaction> {
    let text = raw_text.trim();
    info!("Parsing transaction from {} characters of text", text.len());

    for extractor in EXTRACTORS {
        if let Some(txn) = extractor.extract(text) {
            debug!(
                "Extracted {} transaction via {} with confidence {}",
                txn.date,
                extractor.name(),
                txn.confidence
            );
            return Ok(txn);
        }
        debug!("Format {} did not match", extractor.name());
    }

    Err(ParseError::FormatNotRecognized)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    const STANDARD: &str = "Date: 11 Dec 2025\n\
        Description: STARBUCKS COFFEE MUMBAI\n\
        Amount: -420.00\n\
        Balance after transaction: 18,420.50";

    const PAYMENT_APP: &str = "Uber Ride * Airport Drop\n\
        12/11/2025 → ₹1,250.00 debited\n\
        Available Balance → ₹17,170.50";

    const INLINE: &str =
        "txn123 2025-12-10 Amazon.in Order #403-1234567-8901234 ₹2,999.00 Dr Bal 14171.50 Shopping";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_standard_labeled_statement() {
        let txn = parse_transaction(STANDARD).unwrap();

        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 12, 11).unwrap());
        assert_eq!(txn.description, "STARBUCKS COFFEE MUMBAI");
        assert_eq!(txn.amount, dec("-420.00"));
        assert_eq!(txn.balance, Some(dec("18420.50")));
        assert_eq!(txn.confidence, 100);
    }

    #[test]
    fn test_payment_app_notification() {
        let txn = parse_transaction(PAYMENT_APP).unwrap();

        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 11, 12).unwrap());
        assert!(txn.description.contains("Uber Ride"));
        assert_eq!(txn.amount, dec("-1250.00"));
        assert_eq!(txn.balance, Some(dec("17170.50")));
        assert_eq!(txn.confidence, 100);
    }

    #[test]
    fn test_inline_export() {
        let txn = parse_transaction(INLINE).unwrap();

        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 12, 10).unwrap());
        assert!(txn.description.contains("Amazon.in"));
        assert_eq!(txn.amount, dec("-2999.00"));
        assert_eq!(txn.balance, Some(dec("14171.50")));
        assert_eq!(txn.confidence, 100);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = parse_transaction("").unwrap_err();

        assert_eq!(err, ParseError::FormatNotRecognized);
        assert_eq!(
            err.to_string(),
            "Unable to parse transaction - format not recognized"
        );
    }

    #[test]
    fn test_unrecognized_text_fails() {
        let result = parse_transaction("Just some random text with no numbers");
        assert_eq!(result, Err(ParseError::FormatNotRecognized));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let padded = format!("\n  {PAYMENT_APP}\n\n");
        let txn = parse_transaction(&padded).unwrap();

        assert_eq!(txn.amount, dec("-1250.00"));
    }

    #[test]
    fn test_balance_is_absent_without_marker() {
        let text = "Date: 2 Jan 2025\nDescription: METRO CARD RECHARGE\nAmount: 300.00";
        let txn = parse_transaction(text).unwrap();

        assert_eq!(txn.balance, None);
        assert_eq!(txn.confidence, 100);
    }
}
