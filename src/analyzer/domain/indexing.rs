//! Index maintenance payloads.

use super::ids::{IndexId, TestItemId};
use serde::{Deserialize, Serialize};

/// Reply to an index request, reporting how many items were indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponse {
    items_indexed: u64,
}

impl IndexResponse {
    /// Creates an index reply with the given count.
    #[must_use]
    pub const fn new(items_indexed: u64) -> Self {
        Self { items_indexed }
    }

    /// Returns the number of items the backend indexed.
    #[must_use]
    pub const fn items_indexed(&self) -> u64 {
        self.items_indexed
    }
}

/// Broadcast request asking backends to drop test items from an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanIndexRequest {
    index_id: IndexId,
    item_ids: Vec<TestItemId>,
}

impl CleanIndexRequest {
    /// Creates a clean request for the given index and items.
    #[must_use]
    pub const fn new(index_id: IndexId, item_ids: Vec<TestItemId>) -> Self {
        Self { index_id, item_ids }
    }

    /// Returns the targeted index identifier.
    #[must_use]
    pub const fn index_id(&self) -> IndexId {
        self.index_id
    }

    /// Returns the item identifiers to drop.
    #[must_use]
    pub fn item_ids(&self) -> &[TestItemId] {
        &self.item_ids
    }
}
