//! Amount normalization and the debit/credit sign convention.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::NormalizeError;

/// Parse a matched numeric substring into a signed decimal value.
///
/// Strips the rupee glyph and comma group separators before parsing. An
/// embedded leading `-` survives the parse; inferring sign from debit or
/// credit keywords is the calling extractor's job, not this function's.
pub fn parse_amount(input: &str) -> Result<Decimal, NormalizeError> {
    let cleaned: String = input.chars().filter(|c| !matches!(c, '₹' | ',')).collect();
    let cleaned = cleaned.trim();
    let cleaned = cleaned.strip_prefix('+').unwrap_or(cleaned);
    // The numeric patterns admit a trailing bare decimal point ("420.")
    let cleaned = cleaned.strip_suffix('.').unwrap_or(cleaned);

    if cleaned.is_empty() {
        return Err(NormalizeError::Amount(input.to_string()));
    }

    Decimal::from_str(cleaned).map_err(|_| NormalizeError::Amount(input.to_string()))
}

/// Apply the keyword-inferred sign convention to a parsed amount.
///
/// A debit keyword forces the amount negative regardless of any embedded
/// sign; otherwise the parsed value passes through untouched.
pub fn signed_by_keyword(amount: Decimal, debit: bool) -> Decimal {
    if debit {
        -amount.abs()
    } else {
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount_strips_separators() {
        assert_eq!(parse_amount("18,420.50").unwrap(), dec("18420.50"));
        assert_eq!(parse_amount("₹1,250.00").unwrap(), dec("1250.00"));
        assert_eq!(parse_amount("12,34,567.89").unwrap(), dec("1234567.89"));
    }

    #[test]
    fn test_parse_amount_keeps_embedded_sign() {
        assert_eq!(parse_amount("-420.00").unwrap(), dec("-420.00"));
        assert_eq!(parse_amount("+35.00").unwrap(), dec("35.00"));
    }

    #[test]
    fn test_parse_amount_trailing_point() {
        assert_eq!(parse_amount("420.").unwrap(), dec("420"));
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("₹").is_err());
        assert!(parse_amount(",,,").is_err());
        assert!(parse_amount("coffee").is_err());
    }

    #[test]
    fn test_signed_by_keyword() {
        assert_eq!(signed_by_keyword(dec("1250.00"), true), dec("-1250.00"));
        assert_eq!(signed_by_keyword(dec("-1250.00"), true), dec("-1250.00"));
        assert_eq!(signed_by_keyword(dec("1250.00"), false), dec("1250.00"));
        assert_eq!(signed_by_keyword(dec("-420.00"), false), dec("-420.00"));
    }
}
