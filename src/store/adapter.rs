use std::collections::HashMap;

use crate::model::{Item, ItemDraft, ItemId, ItemPatch, Snapshot};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(ItemId),
    #[error("empty title")]
    EmptyTitle,
    #[error("store file is corrupt: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Boundary to the backing collection. All mutations go through here; the
/// engine never writes items itself. Every call may fail; failures are
/// reported as notices and logged, and never corrupt view state.
pub trait SourceAdapter {
    /// Read the whole collection as a fresh snapshot.
    fn fetch_all(&self) -> Result<Snapshot, StoreError>;
    /// Create a new item from a draft; the store allocates id and position.
    fn create(&mut self, draft: ItemDraft) -> Result<Item, StoreError>;
    /// Apply a partial update to an existing item.
    fn update(&mut self, id: &ItemId, patch: ItemPatch) -> Result<Item, StoreError>;
    /// Remove an item.
    fn delete(&mut self, id: &ItemId) -> Result<(), StoreError>;
    /// Persist a batch of position reassignments from a reorder.
    fn reorder(&mut self, positions: &[(ItemId, i64)]) -> Result<(), StoreError>;
}

/// Identifier of an issued mutation request, monotonic per tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// Last-write-wins bookkeeping for per-item mutations.
///
/// When two requests for the same item are in flight, the result of the
/// older one must be ignored if it resolves after the newer one — ordering
/// is by issuance, not resolution. Callers `issue()` before sending a
/// mutation and check `is_current()` when its result arrives.
#[derive(Debug, Default)]
pub struct InflightTracker {
    next: u64,
    latest: HashMap<ItemId, RequestId>,
}

impl InflightTracker {
    pub fn new() -> Self {
        InflightTracker::default()
    }

    /// Record a new request for `id`, superseding any earlier one.
    pub fn issue(&mut self, id: &ItemId) -> RequestId {
        self.next += 1;
        let request = RequestId(self.next);
        self.latest.insert(id.clone(), request);
        request
    }

    /// Whether `request` is still the newest issued for `id`.
    pub fn is_current(&self, id: &ItemId, request: RequestId) -> bool {
        self.latest.get(id) == Some(&request)
    }

    /// Drop bookkeeping for an item (e.g. after deletion).
    pub fn forget(&mut self, id: &ItemId) {
        self.latest.remove(id);
    }
}
