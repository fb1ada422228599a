//! Durable state store abstraction.
//!
//! String-keyed, JSON-valued. The production backend writes one file per
//! key under the platform data directory; the in-memory backend backs
//! tests. Writes are last-writer-wins: there is exactly one writer per
//! deployment, so no optimistic concurrency control is needed.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sleuth_core::StorageError;

/// Storage key for the persisted user profile.
pub const PROFILE_KEY: &str = "user";
/// Storage key for the recently-viewed dashboard id list.
pub const RECENT_KEY: &str = "recently-viewed";
/// Storage key for the assistant page's saved notepad text.
pub const NOTEPAD_KEY: &str = "content-notepad";

// ============================================================================
// TRAIT
// ============================================================================

/// String-keyed durable storage.
///
/// Implementations must be thread-safe. `read` returns `Ok(None)` for a
/// missing key; corrupt *content* is not this layer's concern (see
/// [`read_json`]).
pub trait StateStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize a JSON value.
///
/// A missing key is `Ok(None)`; unparseable content is
/// `StorageError::Corrupt`, which callers recover from by treating the key
/// as absent and discarding the corrupt copy.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn StateStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.read(key)? {
        None => Ok(None),
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

/// Serialize and write a JSON value.
pub fn write_json<T: Serialize>(
    store: &dyn StateStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| StorageError::WriteFailed {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.write(key, &text)
}

// ============================================================================
// JSON FILE BACKEND
// ============================================================================

/// File-per-key JSON store under a state directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform-local data directory
    /// (e.g. `~/.local/share/sleuth` on Linux).
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("dev", "sleuth-hub", "sleuth").ok_or_else(
            || StorageError::ReadFailed {
                key: "<state dir>".to_string(),
                reason: "could not determine a home directory".to_string(),
            },
        )?;
        Ok(Self::new(dirs.data_local_dir()))
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        fs::write(self.path_for(key), value).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

// ============================================================================
// IN-MEMORY BACKEND
// ============================================================================

/// In-memory store for tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.entries.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        guard.remove(key);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
