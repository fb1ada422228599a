//! Error taxonomy for Sleuth operations.
//!
//! Errors are grouped by layer and aggregated into [`SleuthError`].
//! Policy by class:
//! - not-found and storage corruption are recovered locally (redirect /
//!   treat-as-empty) and never surface as hard failures;
//! - configuration errors and upstream draft failures surface to the user
//!   as inline messages and are never retried automatically.

use thiserror::Error;

/// Catalogue and resolution errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Dashboard not found: {id}")]
    NotFound { id: String },

    #[error("Duplicate dashboard id: {id}")]
    DuplicateId { id: String },

    #[error("Dashboard {id} is missing required field {field}")]
    MissingField { id: String, field: &'static str },

    #[error("Dashboard {id} declares an empty report list")]
    EmptyReports { id: String },

    #[error("Dashboard {id} has duplicate child report id {child_id}")]
    DuplicateChildId { id: String, child_id: String },

    #[error("Invalid catalogue file: {reason}")]
    InvalidFile { reason: String },
}

/// Durable state store errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Failed to read state key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to write state key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Corrupt state at key {key}: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("State store lock poisoned")]
    LockPoisoned,
}

/// Content-draft provider errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("No draft provider configured")]
    ProviderNotConfigured,

    #[error("Request to {provider} failed with status {status}: {message}")]
    RequestFailed {
        provider: String,
        status: i32,
        message: String,
    },

    #[error("Rate limited by {provider}, retry after {retry_after_ms}ms")]
    RateLimited {
        provider: String,
        retry_after_ms: i64,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Master error type for all Sleuth errors.
#[derive(Debug, Clone, Error)]
pub enum SleuthError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),
}

/// Result type alias for Sleuth operations.
pub type SleuthResult<T> = Result<T, SleuthError>;

// =============================================================================
// TESTS
// =============================================================================
