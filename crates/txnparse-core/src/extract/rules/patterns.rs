//! Compiled regex patterns for the supported transaction text formats.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date shapes accepted by the date normalizer
    pub static ref DATE_DAY_MONTH_NAME: Regex = Regex::new(
        r"(\d{1,2})\s+(\w+)\s+(\d{4})"
    ).unwrap();

    pub static ref DATE_SLASH_DMY: Regex = Regex::new(
        r"(\d{1,2})/(\d{1,2})/(\d{4})"
    ).unwrap();

    pub static ref DATE_ISO_YMD: Regex = Regex::new(
        r"(\d{4})-(\d{2})-(\d{2})"
    ).unwrap();

    // Labeled statement markers, located independently of their order
    pub static ref LABELED_DATE: Regex = Regex::new(
        r"(?i)Date:\s*(\d{1,2}\s+\w+\s+\d{4})"
    ).unwrap();

    pub static ref LABELED_DESCRIPTION: Regex = Regex::new(
        r"(?i)Description:\s*([^\n]+?)\s*(?:\n|Amount:|$)"
    ).unwrap();

    pub static ref LABELED_AMOUNT: Regex = Regex::new(
        r"(?i)Amount:\s*([-+]?[\d,]+\.?\d*)"
    ).unwrap();

    pub static ref LABELED_BALANCE: Regex = Regex::new(
        r"(?i)Balance[^\n]*?:\s*([\d,]+\.?\d*)"
    ).unwrap();

    // Payment-app notification lines (date → amount, Balance → amount)
    pub static ref ARROW_DATE_AMOUNT: Regex = Regex::new(
        r"(?i)(\d{1,2}/\d{1,2}/\d{4})\s*→\s*₹?([\d,]+\.?\d*)\s*(debited|credited)?"
    ).unwrap();

    pub static ref ARROW_BALANCE: Regex = Regex::new(
        r"(?i)Balance[^\n]*?→\s*₹?([\d,]+\.?\d*)"
    ).unwrap();

    // Free-form blobs: a glyph-prefixed amount with an optional Dr/Cr/Debit
    // tag, or a bare number immediately tagged with one of those keywords
    pub static ref INLINE_AMOUNT: Regex = Regex::new(
        r"(?i)(?:₹\s*([\d,]+\.?\d*)(?:\s*(?:Dr|Cr|Debit))?|([\d,]+\.?\d*)\s*(?:Dr|Cr|Debit))"
    ).unwrap();

    pub static ref INLINE_BALANCE: Regex = Regex::new(
        r"(?i)Bal\s*([\d,]+\.?\d*)"
    ).unwrap();
}
