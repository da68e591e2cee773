//! Error types for the statement-analyser library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading, parsing and analysing statements.
///
/// Individual statement lines that match no vendor template are never an
/// error: parsers skip them and the tally is reported in the result bundle.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing CSV export.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Wrong or missing password on a protected document.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The document bytes could not be decoded at all.
    #[error("unreadable document: {0}")]
    UnreadableDocument(String),

    /// No vendor marker was recognized in the statement text.
    #[error("unsupported statement format: no known vendor markers found")]
    UnsupportedFormat,

    /// The format was recognized but no valid transactions survived parsing.
    #[error("no transactions found in statement")]
    NoTransactionsFound,

    /// Invalid date format.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Invalid time format.
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Invalid amount format.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
