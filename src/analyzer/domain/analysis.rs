//! Classification results returned by analyzer backends.

use super::ids::TestItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification produced by one backend for one test item.
///
/// Immutable once returned; the issue type carries the defect-type locator
/// the backend assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedItem {
    item_id: TestItemId,
    issue_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    relevant_item_id: Option<TestItemId>,
}

impl AnalyzedItem {
    /// Creates a classification result for one test item.
    #[must_use]
    pub fn new(item_id: TestItemId, issue_type: impl Into<String>) -> Self {
        Self {
            item_id,
            issue_type: issue_type.into(),
            relevant_item_id: None,
        }
    }

    /// Sets the previously analyzed item this classification was derived
    /// from.
    #[must_use]
    pub const fn with_relevant_item(mut self, relevant_item_id: TestItemId) -> Self {
        self.relevant_item_id = Some(relevant_item_id);
        self
    }

    /// Returns the classified test item identifier.
    #[must_use]
    pub const fn item_id(&self) -> TestItemId {
        self.item_id
    }

    /// Returns the assigned defect-type locator.
    #[must_use]
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Returns the item this classification was derived from, if any.
    #[must_use]
    pub const fn relevant_item_id(&self) -> Option<TestItemId> {
        self.relevant_item_id
    }
}

/// Aggregate of per-backend classification results for one analyze call.
///
/// Keyed by each backend's result key. An item identifier appears under at
/// most one key because claimed items are removed from the outstanding
/// request before the next backend is contacted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnalysisReport {
    results: HashMap<String, Vec<AnalyzedItem>>,
}

impl AnalysisReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one backend's results under its key.
    ///
    /// A later registration under the same key replaces the earlier one;
    /// the directory never returns the same backend twice, so this does
    /// not occur during a dispatch.
    pub fn register(&mut self, key: impl Into<String>, items: Vec<AnalyzedItem>) {
        self.results.insert(key.into(), items);
    }

    /// Returns the results contributed under the given key.
    #[must_use]
    pub fn results_for(&self, key: &str) -> Option<&[AnalyzedItem]> {
        self.results.get(key).map(Vec::as_slice)
    }

    /// Returns the keys of all contributing backends.
    pub fn analyzers(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    /// Returns the number of contributing backends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns whether no backend contributed results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Consumes the report, yielding the underlying result map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, Vec<AnalyzedItem>> {
        self.results
    }
}
