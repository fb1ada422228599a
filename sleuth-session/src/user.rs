//! The user state store.
//!
//! Holds the current authenticated profile for the running service and
//! keeps the durable copy in sync: every mutation persists before it
//! returns, so a restart never loses a completed change.

use std::sync::{Arc, RwLock};

use sleuth_core::{StorageError, UserProfile};

use crate::store::{read_json, write_json, StateStore, PROFILE_KEY};

/// Process-wide user state with write-through persistence.
pub struct UserStore {
    store: Arc<dyn StateStore>,
    current: RwLock<Option<UserProfile>>,
}

impl UserStore {
    /// Create the store, rehydrating a persisted profile if one exists.
    ///
    /// A corrupt durable copy is discarded and the user starts logged out;
    /// this is the storage-corruption recovery policy, never a hard error.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let current = match read_json::<UserProfile>(store.as_ref(), PROFILE_KEY) {
            Ok(profile) => profile,
            Err(StorageError::Corrupt { reason, .. }) => {
                tracing::warn!(%reason, "discarding corrupt persisted profile");
                let _ = store.remove(PROFILE_KEY);
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted profile");
                None
            }
        };

        Self {
            store,
            current: RwLock::new(current),
        }
    }

    /// The current profile, if a user is logged in.
    pub fn current(&self) -> Option<UserProfile> {
        self.current
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Overwrite the current profile and persist it.
    pub fn login(&self, profile: UserProfile) -> Result<UserProfile, StorageError> {
        write_json(self.store.as_ref(), PROFILE_KEY, &profile)?;
        let mut guard = self.current.write().map_err(|_| StorageError::LockPoisoned)?;
        *guard = Some(profile.clone());
        Ok(profile)
    }

    /// Clear both the in-memory and durable profile.
    ///
    /// The in-memory state is cleared even if the durable removal fails, so
    /// the routing layer always ends up at the login view.
    pub fn logout(&self) -> Result<(), StorageError> {
        if let Ok(mut guard) = self.current.write() {
            *guard = None;
        }
        self.store.remove(PROFILE_KEY)
    }

    /// Toggle a favorite on the current profile.
    ///
    /// No-op returning `Ok(None)` when nobody is logged in. Otherwise the
    /// full updated profile is persisted before this returns.
    pub fn toggle_favorite(&self, id: &str) -> Result<Option<UserProfile>, StorageError> {
        let mut guard = self.current.write().map_err(|_| StorageError::LockPoisoned)?;
        let Some(profile) = guard.as_mut() else {
            return Ok(None);
        };

        profile.toggle_favorite(id);
        write_json(self.store.as_ref(), PROFILE_KEY, profile)?;
        Ok(Some(profile.clone()))
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
