//! Broker management API implementation of the exchange directory.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::ManagementApiConfig;
use crate::analyzer::{
    domain::{AnalyzerCapabilities, AnalyzerExchange, ExchangeName},
    ports::{DirectoryError, DirectoryResult, ExchangeDirectory},
};

/// Exchange argument naming the declared analyzer key. Its presence marks
/// an exchange as an analyzer backend.
const ANALYZER_KEY_ARGUMENT: &str = "analyzer";

/// Exchange argument flagging indexing support.
const INDEX_SUPPORT_ARGUMENT: &str = "analyzer_index_support";

/// Analyzer exchange directory backed by the broker management API.
///
/// Queries `GET {base}/api/exchanges/{vhost}` and keeps the exchanges
/// whose argument table carries the analyzer marker. Every lookup is a
/// fresh snapshot; nothing is cached between calls.
pub struct ManagementApiDirectory {
    client: reqwest::Client,
    config: ManagementApiConfig,
}

/// Raw exchange row returned by the management API.
#[derive(Debug, Deserialize)]
pub(crate) struct ExchangeRow {
    name: String,
    #[serde(default)]
    arguments: serde_json::Map<String, Value>,
}

impl ManagementApiDirectory {
    /// Creates a directory over the given management API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] when the HTTP client cannot
    /// be constructed.
    pub fn new(config: ManagementApiConfig) -> DirectoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(DirectoryError::unavailable)?;
        Ok(Self { client, config })
    }

    fn exchanges_url(&self) -> String {
        let vhost = self.config.vhost.replace('/', "%2F");
        format!(
            "{}/api/exchanges/{vhost}",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ExchangeDirectory for ManagementApiDirectory {
    async fn analyzer_exchanges(&self) -> DirectoryResult<Vec<AnalyzerExchange>> {
        let response = self
            .client
            .get(self.exchanges_url())
            .basic_auth(&self.config.username, self.config.password.as_deref())
            .send()
            .await
            .map_err(DirectoryError::unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::UnexpectedStatus(status.as_u16()));
        }

        let rows: Vec<ExchangeRow> = response
            .json()
            .await
            .map_err(DirectoryError::invalid_exchange_data)?;

        rows.into_iter()
            .map(parse_exchange_row)
            .filter_map(Result::transpose)
            .collect()
    }
}

/// Interprets one management API row, returning `None` for exchanges that
/// do not carry the analyzer marker.
pub(crate) fn parse_exchange_row(
    row: ExchangeRow,
) -> DirectoryResult<Option<AnalyzerExchange>> {
    if !row.arguments.contains_key(ANALYZER_KEY_ARGUMENT) {
        return Ok(None);
    }

    let name = ExchangeName::new(row.name).map_err(DirectoryError::invalid_exchange_data)?;
    let supports_index = row
        .arguments
        .get(INDEX_SUPPORT_ARGUMENT)
        .is_some_and(argument_truthy);

    let mut capabilities = AnalyzerCapabilities::new(supports_index);
    if let Some(key) = row.arguments.get(ANALYZER_KEY_ARGUMENT).and_then(Value::as_str)
        && !key.is_empty()
    {
        capabilities = capabilities.with_key(key);
    }

    Ok(Some(AnalyzerExchange::new(name, capabilities)))
}

/// Broker argument tables carry booleans either natively or as strings.
fn argument_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => text.eq_ignore_ascii_case("true"),
        _ => false,
    }
}
