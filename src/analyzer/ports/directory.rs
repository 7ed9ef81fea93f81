//! Directory port enumerating live analyzer exchanges.

use crate::analyzer::domain::AnalyzerExchange;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for exchange directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Analyzer exchange discovery contract.
///
/// Implementations return a fresh, current snapshot on every call: nothing
/// is cached, so backends registered or dropped between calls take effect
/// on the next dispatch operation. The returned order is whatever the
/// underlying registry reports; callers must preserve it. No exchange
/// appears twice in one snapshot.
#[async_trait]
pub trait ExchangeDirectory: Send + Sync {
    /// Returns the analyzer exchanges currently registered on the broker.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the registry cannot be reached or
    /// its answer cannot be interpreted.
    async fn analyzer_exchanges(&self) -> DirectoryResult<Vec<AnalyzerExchange>>;
}

/// Errors returned by exchange directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The directory could not be reached.
    #[error("exchange directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The directory answered with an unexpected HTTP status.
    #[error("exchange directory answered with status {0}")]
    UnexpectedStatus(u16),

    /// Directory data could not be reconstructed into domain types.
    #[error("invalid exchange data: {0}")]
    InvalidExchangeData(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a connectivity or protocol error from the directory.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps a data-quality error from a directory row.
    pub fn invalid_exchange_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidExchangeData(Arc::new(err))
    }
}
