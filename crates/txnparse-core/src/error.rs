//! Error types for the txnparse-core library.

use thiserror::Error;

/// Terminal error returned by the dispatcher when no format matched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// None of the known transaction formats recognized the input.
    #[error("Unable to parse transaction - format not recognized")]
    FormatNotRecognized,
}

/// Errors raised while normalizing a matched substring.
///
/// These never leave the extractor that hit them: the extractor converts a
/// normalization failure into its own no-match outcome and the dispatcher
/// moves on to the next format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The substring did not resolve to a calendar date in any supported shape.
    #[error("unrecognized date: {0}")]
    Date(String),

    /// The substring was not a valid decimal number after cleanup.
    #[error("invalid amount: {0}")]
    Amount(String),
}

/// Result type for the txnparse library.
pub type Result<T> = std::result::Result<T, ParseError>;
