//! Dispatch service fanning operations out to analyzer exchanges.
//!
//! Provides [`AnalyzerDispatchService`] which coordinates indexing,
//! analysis, and index maintenance across every analyzer exchange the
//! directory reports.

use crate::analyzer::{
    domain::{
        AnalysisReport, AnalyzerExchange, CleanIndexRequest, DispatchId, IndexId, IndexLaunch,
        IndexResponse, TestItemId,
    },
    ports::{AnalyzerTransport, ExchangeDirectory, TransportError},
    services::reduce,
};
use futures::future;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for dispatch operations.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// A request to one analyzer exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type for dispatch service operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Coordinates analyzer operations across all registered exchanges.
///
/// The directory is queried afresh for every operation; membership changes
/// take effect on the next call. An unavailable directory degrades to an
/// empty snapshot, so operations no-op rather than fail. A transport
/// failure against any single exchange fails the whole operation.
#[derive(Clone)]
pub struct AnalyzerDispatchService<D, T>
where
    D: ExchangeDirectory,
    T: AnalyzerTransport,
{
    directory: Arc<D>,
    transport: Arc<T>,
}

impl<D, T> AnalyzerDispatchService<D, T>
where
    D: ExchangeDirectory,
    T: AnalyzerTransport,
{
    /// Creates a new dispatch service.
    #[must_use]
    pub const fn new(directory: Arc<D>, transport: Arc<T>) -> Self {
        Self {
            directory,
            transport,
        }
    }

    /// Returns whether at least one analyzer exchange is registered.
    ///
    /// An unavailable directory reads as "no analyzers".
    pub async fn has_analyzers(&self) -> bool {
        !self.snapshot(DispatchId::new()).await.is_empty()
    }

    /// Sends the launches to every exchange that supports indexing and
    /// returns the total number of items indexed.
    ///
    /// Exchanges without the indexing capability are never contacted.
    /// With zero qualifying exchanges nothing is sent and `Ok(0)` is
    /// returned. Qualifying backends all receive the identical request,
    /// so the fan-out runs concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Transport`] when any qualifying exchange
    /// cannot be reached or answers with a malformed reply.
    pub async fn index(&self, launches: &[IndexLaunch]) -> DispatchResult<u64> {
        let dispatch_id = DispatchId::new();
        let exchanges = self.snapshot(dispatch_id).await;
        let qualifying: Vec<&AnalyzerExchange> =
            exchanges.iter().filter(|e| e.supports_index()).collect();

        if qualifying.is_empty() {
            debug!(%dispatch_id, "no analyzer exchange supports indexing, nothing sent");
            return Ok(0);
        }

        let replies = future::try_join_all(
            qualifying
                .iter()
                .map(|exchange| self.transport.send_index(exchange.name(), launches)),
        )
        .await?;

        let indexed: u64 = replies.iter().map(IndexResponse::items_indexed).sum();
        debug!(%dispatch_id, analyzers = qualifying.len(), indexed, "index dispatch finished");
        Ok(indexed)
    }

    /// Runs the launch through every registered exchange and returns the
    /// per-backend analysis report.
    ///
    /// Exchanges are processed sequentially in the exact order the
    /// directory returned at call start; the snapshot is never re-queried
    /// mid-call. The launch is owned and exclusively mutated for the
    /// duration of the call: items one backend classifies are removed
    /// before the next backend sees the request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Transport`] when any exchange cannot be
    /// reached or answers with a malformed reply.
    pub async fn analyze(&self, launch: IndexLaunch) -> DispatchResult<AnalysisReport> {
        let dispatch_id = DispatchId::new();
        let exchanges = self.snapshot(dispatch_id).await;
        let report = reduce::run_analysis(self.transport.as_ref(), &exchanges, launch).await?;
        debug!(
            %dispatch_id,
            analyzers = exchanges.len(),
            contributing = report.len(),
            "analysis dispatch finished"
        );
        Ok(report)
    }

    /// Broadcasts a clean request for the given index and items to every
    /// registered exchange, unconditionally.
    ///
    /// Fire-and-forget: success means every message was handed to the
    /// broker, not that any backend acted on it.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Transport`] when any message cannot be
    /// handed to the broker.
    pub async fn clean_index(
        &self,
        index_id: IndexId,
        item_ids: Vec<TestItemId>,
    ) -> DispatchResult<()> {
        let dispatch_id = DispatchId::new();
        let exchanges = self.snapshot(dispatch_id).await;
        let request = CleanIndexRequest::new(index_id, item_ids);

        future::try_join_all(
            exchanges
                .iter()
                .map(|exchange| self.transport.send_clean(exchange.name(), &request)),
        )
        .await?;

        debug!(%dispatch_id, %index_id, analyzers = exchanges.len(), "clean request broadcast");
        Ok(())
    }

    /// Broadcasts an index deletion to every registered exchange,
    /// unconditionally, with the same fire-and-forget contract as
    /// [`clean_index`](Self::clean_index).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Transport`] when any message cannot be
    /// handed to the broker.
    pub async fn delete_index(&self, index_id: IndexId) -> DispatchResult<()> {
        let dispatch_id = DispatchId::new();
        let exchanges = self.snapshot(dispatch_id).await;

        future::try_join_all(
            exchanges
                .iter()
                .map(|exchange| self.transport.send_delete(exchange.name(), index_id)),
        )
        .await?;

        debug!(%dispatch_id, %index_id, analyzers = exchanges.len(), "delete request broadcast");
        Ok(())
    }

    /// Fetches the current exchange snapshot, degrading to an empty set
    /// when the directory is unavailable.
    async fn snapshot(&self, dispatch_id: DispatchId) -> Vec<AnalyzerExchange> {
        match self.directory.analyzer_exchanges().await {
            Ok(exchanges) => exchanges,
            Err(err) => {
                warn!(%dispatch_id, error = %err, "exchange lookup failed, continuing with empty set");
                Vec::new()
            }
        }
    }
}
