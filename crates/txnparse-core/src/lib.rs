//! Core library for bank transaction text extraction.
//!
//! This crate provides:
//! - Multi-format transaction text parsing (labeled statement blocks,
//!   payment-app notifications, free-form inline exports)
//! - Date and amount normalization with a fixed day-first date convention
//! - Confidence scoring for extracted records
//!
//! The entry point is [`parse_transaction`]:
//!
//! ```
//! use txnparse_core::parse_transaction;
//!
//! let record = parse_transaction("Date: 11 Dec 2025\nDescription: COFFEE SHOP\nAmount: -420.00")?;
//! assert_eq!(record.description, "COFFEE SHOP");
//! assert_eq!(record.confidence, 100);
//! # Ok::<(), txnparse_core::ParseError>(())
//! ```

pub mod error;
pub mod extract;
pub mod models;

pub use error::{NormalizeError, ParseError, Result};
pub use extract::{parse_transaction, FormatExtractor};
pub use models::ParsedTransaction;
