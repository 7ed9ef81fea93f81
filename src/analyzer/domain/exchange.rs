//! Analyzer exchange descriptor.

use super::{AnalyzerCapabilities, ExchangeName};
use serde::{Deserialize, Serialize};

/// Snapshot of one analyzer exchange registered on the broker.
///
/// Descriptors are fetched fresh from the directory for every dispatch
/// operation; membership changes take effect on the next call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerExchange {
    name: ExchangeName,
    capabilities: AnalyzerCapabilities,
}

impl AnalyzerExchange {
    /// Creates an exchange descriptor.
    #[must_use]
    pub const fn new(name: ExchangeName, capabilities: AnalyzerCapabilities) -> Self {
        Self { name, capabilities }
    }

    /// Returns the exchange name addressing this backend.
    #[must_use]
    pub const fn name(&self) -> &ExchangeName {
        &self.name
    }

    /// Returns the declared capability metadata.
    #[must_use]
    pub const fn capabilities(&self) -> &AnalyzerCapabilities {
        &self.capabilities
    }

    /// Returns whether this backend accepts index requests.
    #[must_use]
    pub const fn supports_index(&self) -> bool {
        self.capabilities.supports_index()
    }

    /// Returns the key this backend's results are reported under.
    ///
    /// Resolves to the declared analyzer key, falling back to the bare
    /// exchange name when no key was declared.
    #[must_use]
    pub fn result_key(&self) -> &str {
        self.capabilities
            .analyzer_key()
            .unwrap_or_else(|| self.name.as_str())
    }
}
