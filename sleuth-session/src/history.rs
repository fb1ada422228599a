//! Recently-viewed history.
//!
//! An append-to-front, deduplicated, size-bounded list of dashboard ids.
//! Recording is a fire-and-forget side effect of opening a dashboard:
//! callers log a failed write and carry on rendering. Reads never fail;
//! empty or corrupt durable state yields an empty list.

use std::sync::Arc;

use sleuth_core::{DashboardConfig, StorageError};
use sleuth_registry::Catalog;

use crate::store::{read_json, write_json, StateStore, RECENT_KEY};

/// Maximum ids retained in durable storage.
pub const MAX_STORED: usize = 10;
/// Default number of entries surfaced on the catalogue page.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// Tracker over the durable recently-viewed list.
pub struct HistoryTracker {
    store: Arc<dyn StateStore>,
}

impl HistoryTracker {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Move `id` to the front of the stored list, deduplicating, and
    /// truncate to [`MAX_STORED`].
    pub fn record_view(&self, id: &str) -> Result<(), StorageError> {
        let mut ids = self.stored_ids();
        ids.retain(|stored| stored != id);
        ids.insert(0, id.to_string());
        ids.truncate(MAX_STORED);
        write_json(self.store.as_ref(), RECENT_KEY, &ids)
    }

    /// At most `limit` stored ids, most-recent-first.
    pub fn recent_ids(&self, limit: usize) -> Vec<String> {
        let mut ids = self.stored_ids();
        ids.truncate(limit);
        ids
    }

    /// At most `limit` recently-viewed entries resolved through the
    /// catalogue, most-recent-first. Ids that no longer resolve are
    /// silently dropped.
    pub fn recent(&self, catalog: &Catalog, limit: usize) -> Vec<DashboardConfig> {
        self.stored_ids()
            .iter()
            .filter_map(|id| catalog.lookup(id).cloned())
            .take(limit)
            .collect()
    }

    fn stored_ids(&self) -> Vec<String> {
        match read_json::<Vec<String>>(self.store.as_ref(), RECENT_KEY) {
            Ok(Some(ids)) => ids,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "treating recently-viewed state as empty");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for HistoryTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryTracker").finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
