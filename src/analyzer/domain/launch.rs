//! Index request payloads offered to analyzer backends.

use super::ids::{LaunchId, TestItemId};
use serde::{Deserialize, Serialize};

/// Single log line attached to a test item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexLog {
    log_level: i32,
    message: String,
}

impl IndexLog {
    /// Creates a log line with the given level and message.
    #[must_use]
    pub fn new(log_level: i32, message: impl Into<String>) -> Self {
        Self {
            log_level,
            message: message.into(),
        }
    }

    /// Returns the numeric log level.
    #[must_use]
    pub const fn log_level(&self) -> i32 {
        self.log_level
    }

    /// Returns the log message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One test item offered to analyzer backends for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexTestItem {
    test_item_id: TestItemId,
    unique_id: String,
    logs: Vec<IndexLog>,
}

impl IndexTestItem {
    /// Creates a test item with no attached logs.
    #[must_use]
    pub fn new(test_item_id: TestItemId, unique_id: impl Into<String>) -> Self {
        Self {
            test_item_id,
            unique_id: unique_id.into(),
            logs: Vec::new(),
        }
    }

    /// Attaches log lines to the test item.
    #[must_use]
    pub fn with_logs(mut self, logs: impl IntoIterator<Item = IndexLog>) -> Self {
        self.logs = logs.into_iter().collect();
        self
    }

    /// Returns the test item identifier.
    #[must_use]
    pub const fn test_item_id(&self) -> TestItemId {
        self.test_item_id
    }

    /// Returns the stable unique id of the test case.
    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Returns the attached log lines.
    #[must_use]
    pub fn logs(&self) -> &[IndexLog] {
        &self.logs
    }
}

/// Index request for one launch.
///
/// The request is mutable during analysis: items classified by one backend
/// are removed before the request is offered to the next backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexLaunch {
    launch_id: LaunchId,
    launch_name: String,
    project: String,
    test_items: Vec<IndexTestItem>,
}

impl IndexLaunch {
    /// Creates an index request with no test items.
    #[must_use]
    pub fn new(launch_id: LaunchId, launch_name: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            launch_id,
            launch_name: launch_name.into(),
            project: project.into(),
            test_items: Vec::new(),
        }
    }

    /// Sets the test items offered for classification.
    #[must_use]
    pub fn with_test_items(mut self, items: impl IntoIterator<Item = IndexTestItem>) -> Self {
        self.test_items = items.into_iter().collect();
        self
    }

    /// Returns the launch identifier.
    #[must_use]
    pub const fn launch_id(&self) -> LaunchId {
        self.launch_id
    }

    /// Returns the launch name.
    #[must_use]
    pub fn launch_name(&self) -> &str {
        &self.launch_name
    }

    /// Returns the owning project.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the outstanding test items.
    #[must_use]
    pub fn test_items(&self) -> &[IndexTestItem] {
        &self.test_items
    }

    /// Returns the number of outstanding test items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.test_items.len()
    }

    /// Returns whether any test items remain outstanding.
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.test_items.is_empty()
    }

    /// Removes every test item whose identifier appears in `claimed`.
    ///
    /// Returns the number of items removed. Items removed here are never
    /// offered to subsequent backends.
    pub fn remove_items(&mut self, claimed: &[TestItemId]) -> usize {
        let before = self.test_items.len();
        self.test_items
            .retain(|item| !claimed.contains(&item.test_item_id()));
        before - self.test_items.len()
    }
}
