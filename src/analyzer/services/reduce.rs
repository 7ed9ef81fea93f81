//! Sequential analysis fold across analyzer exchanges.

use crate::analyzer::{
    domain::{AnalysisReport, AnalyzedItem, AnalyzerExchange, IndexLaunch, TestItemId},
    ports::{AnalyzerTransport, TransportResult},
};
use tracing::debug;

/// Folds one launch through the given exchanges, in order.
///
/// Each exchange is offered the current outstanding launch. A non-empty
/// reply is registered in the report under the backend's result key, and
/// every claimed item is removed from the launch before the next exchange
/// is contacted. Later backends only ever see what remains, so the first
/// backend in directory order wins contested items by construction. An
/// empty or absent reply contributes nothing and leaves the launch
/// untouched.
///
/// Exchanges must be processed sequentially: each reply shrinks the
/// request seen by the next backend, so this fold cannot be parallelized.
///
/// # Errors
///
/// Returns the first [`TransportError`](crate::analyzer::ports::TransportError)
/// encountered; a single unreachable backend fails the whole fold.
pub async fn run_analysis<T>(
    transport: &T,
    exchanges: &[AnalyzerExchange],
    launch: IndexLaunch,
) -> TransportResult<AnalysisReport>
where
    T: AnalyzerTransport + ?Sized,
{
    let mut outstanding = launch;
    let mut report = AnalysisReport::new();

    for exchange in exchanges {
        let Some(results) = transport.send_analyze(exchange.name(), &outstanding).await? else {
            debug!(exchange = %exchange.name(), "no analysis reply");
            continue;
        };
        if results.is_empty() {
            debug!(exchange = %exchange.name(), "empty analysis reply");
            continue;
        }

        let claimed: Vec<TestItemId> = results.iter().map(AnalyzedItem::item_id).collect();
        let removed = outstanding.remove_items(&claimed);
        debug!(
            exchange = %exchange.name(),
            key = exchange.result_key(),
            claimed = claimed.len(),
            removed,
            outstanding = outstanding.item_count(),
            "analysis contribution registered"
        );
        report.register(exchange.result_key(), results);
    }

    Ok(report)
}
