//! Shared world state for analyzer dispatch BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use triage::analyzer::{
    adapters::memory::{InMemoryExchangeDirectory, ScriptedAnalyzerTransport},
    domain::{
        AnalysisReport, AnalyzedItem, AnalyzerCapabilities, AnalyzerExchange, ExchangeName,
        IndexLaunch, IndexTestItem, LaunchId, TestItemId,
    },
    services::AnalyzerDispatchService,
};

/// Service type used by the BDD world.
pub type TestDispatchService =
    AnalyzerDispatchService<InMemoryExchangeDirectory, ScriptedAnalyzerTransport>;

/// Scenario world for analyzer dispatch behaviour tests.
pub struct DispatchWorld {
    /// Directory the service snapshots on every operation.
    pub directory: InMemoryExchangeDirectory,
    /// Transport recording outbound messages and scripted replies.
    pub transport: ScriptedAnalyzerTransport,
    /// The dispatch service under test.
    pub dispatch: TestDispatchService,
    /// Launch queued for the next operation.
    pub launch: Option<IndexLaunch>,
    /// Report returned by the last analyze call.
    pub last_report: Option<AnalysisReport>,
    /// Total returned by the last index call.
    pub last_indexed: Option<u64>,
}

impl DispatchWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let directory = InMemoryExchangeDirectory::new();
        let transport = ScriptedAnalyzerTransport::new();
        let dispatch =
            AnalyzerDispatchService::new(Arc::new(directory.clone()), Arc::new(transport.clone()));
        Self {
            directory,
            transport,
            dispatch,
            launch: None,
            last_report: None,
            last_indexed: None,
        }
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a comma-separated id list like `"1,2,3"`.
pub fn parse_ids(raw: &str) -> Result<Vec<i64>, eyre::Report> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|err| eyre::eyre!("bad id '{part}': {err}"))
        })
        .collect()
}

/// Builds a validated exchange name from a scenario label.
pub fn exchange_name(name: &str) -> Result<ExchangeName, eyre::Report> {
    ExchangeName::new(name).map_err(|err| eyre::eyre!("invalid exchange name: {err}"))
}

/// Builds an analyzer exchange with the given indexing capability.
pub fn build_exchange(name: &str, supports_index: bool) -> Result<AnalyzerExchange, eyre::Report> {
    Ok(AnalyzerExchange::new(
        exchange_name(name)?,
        AnalyzerCapabilities::new(supports_index),
    ))
}

/// Builds classification results for the given test item ids.
pub fn classified(ids: &[i64]) -> Vec<AnalyzedItem> {
    ids.iter()
        .map(|id| AnalyzedItem::new(TestItemId::new(*id), "ab001"))
        .collect()
}

/// Builds a launch holding the given test item ids.
pub fn launch_with_items(ids: &[i64]) -> IndexLaunch {
    IndexLaunch::new(LaunchId::new(1), "smoke", "default_project").with_test_items(
        ids.iter()
            .map(|id| IndexTestItem::new(TestItemId::new(*id), format!("case-{id}"))),
    )
}

/// Extracts the item ids a recorded analyze payload offered.
pub fn offered_item_ids(payload: &serde_json::Value) -> Result<Vec<i64>, eyre::Report> {
    payload
        .pointer("/0/testItems")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| eyre::eyre!("analyze payload should wrap one launch"))?
        .iter()
        .map(|item| {
            item.pointer("/testItemId")
                .and_then(serde_json::Value::as_i64)
                .ok_or_else(|| eyre::eyre!("test item without id in payload"))
        })
        .collect()
}
