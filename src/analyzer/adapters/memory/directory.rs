//! In-memory exchange directory for dispatch tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::analyzer::{
    domain::AnalyzerExchange,
    ports::{DirectoryError, DirectoryResult, ExchangeDirectory},
};

/// Thread-safe in-memory analyzer exchange directory.
///
/// Returns a fresh clone of the registered exchanges on every call, in
/// registration order, mirroring the snapshot semantics of the broker
/// directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExchangeDirectory {
    exchanges: Arc<RwLock<Vec<AnalyzerExchange>>>,
}

impl InMemoryExchangeDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-populated with the given exchanges.
    #[must_use]
    pub fn with_exchanges(exchanges: impl IntoIterator<Item = AnalyzerExchange>) -> Self {
        Self {
            exchanges: Arc::new(RwLock::new(exchanges.into_iter().collect())),
        }
    }

    /// Registers an additional exchange at the end of the snapshot order.
    pub fn register(&self, exchange: AnalyzerExchange) {
        self.exchanges
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(exchange);
    }

    /// Replaces the registered exchanges.
    pub fn set_exchanges(&self, exchanges: impl IntoIterator<Item = AnalyzerExchange>) {
        *self
            .exchanges
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) =
            exchanges.into_iter().collect();
    }
}

#[async_trait]
impl ExchangeDirectory for InMemoryExchangeDirectory {
    async fn analyzer_exchanges(&self) -> DirectoryResult<Vec<AnalyzerExchange>> {
        let exchanges = self
            .exchanges
            .read()
            .map_err(|err| DirectoryError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(exchanges.clone())
    }
}
