//! Shared application state for Axum routers.

use std::sync::Arc;
use std::time::Instant;

use sleuth_draft::DraftProvider;
use sleuth_registry::Catalog;
use sleuth_session::{HistoryTracker, StateStore, UserStore};

use crate::auth::SessionManager;

/// Application-wide state shared across all routes.
///
/// The catalogue is loaded once and immutable; user state, history, and
/// sessions are the mutable per-user layer around it. The draft provider
/// is optional: an unconfigured deployment keeps every other route working
/// and reports a configuration error from the draft endpoint only.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub users: Arc<UserStore>,
    pub history: Arc<HistoryTracker>,
    pub sessions: Arc<SessionManager>,
    pub drafts: Option<Arc<dyn DraftProvider>>,
    pub store: Arc<dyn StateStore>,
    pub start_time: Instant,
}

impl AppState {
    /// Assemble state over a catalogue, a durable store, and an optional
    /// draft provider.
    pub fn new(
        catalog: Arc<Catalog>,
        store: Arc<dyn StateStore>,
        drafts: Option<Arc<dyn DraftProvider>>,
    ) -> Self {
        Self {
            catalog,
            users: Arc::new(UserStore::new(store.clone())),
            history: Arc::new(HistoryTracker::new(store.clone())),
            sessions: Arc::new(SessionManager::new()),
            drafts,
            store,
            start_time: Instant::now(),
        }
    }
}
