//! Transport port carrying requests to analyzer exchanges.

use crate::analyzer::domain::{
    AnalyzedItem, CleanIndexRequest, ExchangeName, IndexId, IndexLaunch, IndexResponse,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Routing key for index requests, common across all backends.
pub const INDEX_ROUTE: &str = "index";

/// Routing key for analysis requests, common across all backends.
pub const ANALYZE_ROUTE: &str = "analyze";

/// Routing key for index deletion requests, common across all backends.
pub const DELETE_ROUTE: &str = "delete";

/// Routing key for index clean requests, common across all backends.
pub const CLEAN_ROUTE: &str = "clean";

/// Result type for analyzer transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Messaging contract between the dispatch coordinator and one backend.
///
/// Each method addresses a backend-specific exchange on a fixed route.
/// `send_index` and `send_analyze` block on a request/reply round trip;
/// `send_clean` and `send_delete` are fire-and-forget: returning `Ok`
/// means the message was handed to the broker, not that any backend acted
/// on it. Retry and backoff policies, where desired, belong behind this
/// port, never in the coordinator.
#[async_trait]
pub trait AnalyzerTransport: Send + Sync {
    /// Sends launches to the [`INDEX_ROUTE`] of the given exchange and
    /// awaits the indexing reply.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when delivery fails or the reply cannot
    /// be decoded.
    async fn send_index(
        &self,
        exchange: &ExchangeName,
        launches: &[IndexLaunch],
    ) -> TransportResult<IndexResponse>;

    /// Sends one launch to the [`ANALYZE_ROUTE`] of the given exchange and
    /// awaits the classification reply.
    ///
    /// On the wire the request body is a single-element sequence wrapping
    /// the launch. `Ok(None)` means the backend produced no reply.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when delivery fails or the reply cannot
    /// be decoded.
    async fn send_analyze(
        &self,
        exchange: &ExchangeName,
        launch: &IndexLaunch,
    ) -> TransportResult<Option<Vec<AnalyzedItem>>>;

    /// Sends a clean request to the [`CLEAN_ROUTE`] of the given exchange.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the message cannot be handed to the
    /// broker.
    async fn send_clean(
        &self,
        exchange: &ExchangeName,
        request: &CleanIndexRequest,
    ) -> TransportResult<()>;

    /// Sends a bare index id to the [`DELETE_ROUTE`] of the given
    /// exchange.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the message cannot be handed to the
    /// broker.
    async fn send_delete(
        &self,
        exchange: &ExchangeName,
        index_id: IndexId,
    ) -> TransportResult<()>;
}

/// Errors returned by analyzer transport implementations.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The message could not be delivered to the exchange.
    #[error("delivery to exchange '{exchange}' failed: {source}")]
    Delivery {
        /// The exchange the message was addressed to.
        exchange: ExchangeName,
        /// The underlying transport failure.
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// A reply arrived but could not be decoded.
    #[error("malformed reply from exchange '{exchange}': {source}")]
    MalformedReply {
        /// The exchange that answered.
        exchange: ExchangeName,
        /// The underlying decode failure.
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl TransportError {
    /// Wraps a delivery failure against the given exchange.
    pub fn delivery(
        exchange: &ExchangeName,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Delivery {
            exchange: exchange.clone(),
            source: Arc::new(err),
        }
    }

    /// Wraps a reply-decoding failure from the given exchange.
    pub fn malformed_reply(
        exchange: &ExchangeName,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MalformedReply {
            exchange: exchange.clone(),
            source: Arc::new(err),
        }
    }
}
