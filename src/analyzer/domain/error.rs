//! Error types for analyzer domain validation.

use thiserror::Error;

/// Errors returned while constructing analyzer domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyzerDomainError {
    /// The exchange name is empty after trimming.
    #[error("exchange name must not be empty")]
    EmptyExchangeName,

    /// The exchange name contains characters outside `[a-zA-Z0-9-_.:]`.
    #[error(
        "exchange name '{0}' contains invalid characters (only alphanumeric, '-', '_', '.' and ':' allowed)"
    )]
    InvalidExchangeName(String),

    /// The exchange name exceeds the 255-byte AMQP short-string limit.
    #[error("exchange name exceeds 255 character limit: {0}")]
    ExchangeNameTooLong(String),
}
