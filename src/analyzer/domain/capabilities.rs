//! Analyzer exchange capability metadata.

use serde::{Deserialize, Serialize};

/// Describes the declared capabilities of an analyzer exchange.
///
/// Capabilities originate from the argument table the backend attached to
/// its exchange when registering on the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerCapabilities {
    supports_index: bool,
    analyzer_key: Option<String>,
}

impl AnalyzerCapabilities {
    /// Creates capabilities with the indexing flag and no declared key.
    #[must_use]
    pub const fn new(supports_index: bool) -> Self {
        Self {
            supports_index,
            analyzer_key: None,
        }
    }

    /// Sets the declared analyzer key used to label results.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.analyzer_key = Some(key.into());
        self
    }

    /// Returns whether the backend accepts index requests.
    #[must_use]
    pub const fn supports_index(&self) -> bool {
        self.supports_index
    }

    /// Returns the declared analyzer key, if any.
    #[must_use]
    pub fn analyzer_key(&self) -> Option<&str> {
        self.analyzer_key.as_deref()
    }
}
