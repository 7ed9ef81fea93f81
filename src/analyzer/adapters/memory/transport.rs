//! Scripted analyzer transport recording outbound traffic.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::analyzer::{
    domain::{AnalyzedItem, CleanIndexRequest, ExchangeName, IndexId, IndexLaunch, IndexResponse},
    ports::{
        ANALYZE_ROUTE, AnalyzerTransport, CLEAN_ROUTE, DELETE_ROUTE, INDEX_ROUTE, TransportError,
        TransportResult,
    },
};

/// One message recorded by [`ScriptedAnalyzerTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    exchange: String,
    route: &'static str,
    payload: Value,
}

impl SentMessage {
    /// Returns the exchange the message was addressed to.
    #[must_use]
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Returns the routing key the message was sent on.
    #[must_use]
    pub const fn route(&self) -> &'static str {
        self.route
    }

    /// Returns the JSON body exactly as it went on the wire.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Analyzer transport double answering from scripted replies.
///
/// Records every outbound message so tests can assert on ordering and
/// payload contents. Exchanges without a scripted reply contribute
/// nothing: absent analysis replies and zero indexed items.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnalyzerTransport {
    state: Arc<RwLock<ScriptedState>>,
}

#[derive(Debug, Default)]
struct ScriptedState {
    analyze_replies: HashMap<String, VecDeque<Option<Vec<AnalyzedItem>>>>,
    index_replies: HashMap<String, u64>,
    failing: HashSet<String>,
    sent: Vec<SentMessage>,
}

impl ScriptedAnalyzerTransport {
    /// Creates a transport with no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an analysis reply for the given exchange.
    ///
    /// Replies are consumed in the order they were scripted; once the
    /// queue runs dry the exchange stops replying.
    pub fn script_analyze_reply(
        &self,
        exchange: &ExchangeName,
        reply: Option<Vec<AnalyzedItem>>,
    ) {
        self.write_state()
            .analyze_replies
            .entry(exchange.as_str().to_owned())
            .or_default()
            .push_back(reply);
    }

    /// Sets the indexed-item count the given exchange reports.
    pub fn script_index_reply(&self, exchange: &ExchangeName, items_indexed: u64) {
        self.write_state()
            .index_replies
            .insert(exchange.as_str().to_owned(), items_indexed);
    }

    /// Makes every delivery to the given exchange fail.
    pub fn fail_deliveries_to(&self, exchange: &ExchangeName) {
        self.write_state()
            .failing
            .insert(exchange.as_str().to_owned());
    }

    /// Returns every message sent so far, in send order.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMessage> {
        self.read_state().sent.clone()
    }

    /// Returns the messages sent to one exchange, in send order.
    #[must_use]
    pub fn sent_to(&self, exchange: &ExchangeName) -> Vec<SentMessage> {
        self.read_state()
            .sent
            .iter()
            .filter(|message| message.exchange == exchange.as_str())
            .cloned()
            .collect()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ScriptedState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ScriptedState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records an outbound message, honoring scripted delivery failures.
    fn record(
        &self,
        exchange: &ExchangeName,
        route: &'static str,
        payload: Value,
    ) -> TransportResult<()> {
        let mut state = self.write_state();
        if state.failing.contains(exchange.as_str()) {
            return Err(TransportError::delivery(
                exchange,
                std::io::Error::other("scripted delivery failure"),
            ));
        }
        state.sent.push(SentMessage {
            exchange: exchange.as_str().to_owned(),
            route,
            payload,
        });
        Ok(())
    }
}

#[async_trait]
impl AnalyzerTransport for ScriptedAnalyzerTransport {
    async fn send_index(
        &self,
        exchange: &ExchangeName,
        launches: &[IndexLaunch],
    ) -> TransportResult<IndexResponse> {
        let payload =
            serde_json::to_value(launches).map_err(|err| TransportError::delivery(exchange, err))?;
        self.record(exchange, INDEX_ROUTE, payload)?;

        let items_indexed = self
            .read_state()
            .index_replies
            .get(exchange.as_str())
            .copied()
            .unwrap_or(0);
        Ok(IndexResponse::new(items_indexed))
    }

    async fn send_analyze(
        &self,
        exchange: &ExchangeName,
        launch: &IndexLaunch,
    ) -> TransportResult<Option<Vec<AnalyzedItem>>> {
        // Wire shape: a single-element sequence wrapping the launch.
        let payload = serde_json::to_value(std::slice::from_ref(launch))
            .map_err(|err| TransportError::delivery(exchange, err))?;
        self.record(exchange, ANALYZE_ROUTE, payload)?;

        let reply = self
            .write_state()
            .analyze_replies
            .get_mut(exchange.as_str())
            .and_then(VecDeque::pop_front)
            .flatten();
        Ok(reply)
    }

    async fn send_clean(
        &self,
        exchange: &ExchangeName,
        request: &CleanIndexRequest,
    ) -> TransportResult<()> {
        let payload =
            serde_json::to_value(request).map_err(|err| TransportError::delivery(exchange, err))?;
        self.record(exchange, CLEAN_ROUTE, payload)
    }

    async fn send_delete(
        &self,
        exchange: &ExchangeName,
        index_id: IndexId,
    ) -> TransportResult<()> {
        let payload = serde_json::to_value(index_id)
            .map_err(|err| TransportError::delivery(exchange, err))?;
        self.record(exchange, DELETE_ROUTE, payload)
    }
}
