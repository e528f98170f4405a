//! Core error types for the fxledger application.
//!
//! This module defines store-agnostic error types. Transport-specific errors
//! (from reqwest, JSON decoding, etc.) are converted to these types by the
//! storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger application.
///
/// Integrity errors block snapshot computation outright: the engine never
/// degrades a snapshot to a partial or zero-coerced result.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ledger integrity violation: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Record store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Transport-agnostic error type for record store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert transport-specific errors (reqwest, serde, etc.) into this
/// format. Failures here are transient from the engine's perspective: the
/// caller decides whether to retry, and a failed refresh never replaces the
/// last good snapshot.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store endpoint could not be reached.
    #[error("Record store unreachable: {0}")]
    Unreachable(String),

    /// The store answered, but the body could not be decoded.
    #[error("Malformed store response: {0}")]
    MalformedResponse(String),

    /// The store answered with a non-success status.
    #[error("Record store rejected the request: {0}")]
    Rejected(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
